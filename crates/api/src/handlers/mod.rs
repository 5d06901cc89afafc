/// Handlers for the schedule query and booking endpoints
pub mod schedule;
