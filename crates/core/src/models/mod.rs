/// Request and response types for the schedule endpoints
pub mod schedule;
/// Slot identity types
pub mod slot;
