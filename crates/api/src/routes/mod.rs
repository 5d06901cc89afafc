/// Health and version probes
pub mod health;
/// Schedule query and booking routes
pub mod schedule;
