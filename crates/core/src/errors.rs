use thiserror::Error;

use crate::models::slot::SlotLabel;

/// Errors surfaced to callers of the booking engine.
///
/// Every variant is either malformed caller input or a business-rule
/// conflict; the engine has no internal failure modes. The display strings
/// for the input variants are part of the HTTP contract and must not drift.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDate,

    #[error("Invalid time format. Use HH:MM (24-hour format).")]
    InvalidTime,

    #[error("Missing 'time' in request body")]
    MissingTime,

    #[error("Time {0} is outside the operating window or not aligned to the slot interval")]
    OffGrid(SlotLabel),

    #[error("Slot {0} is already booked")]
    AlreadyBooked(SlotLabel),
}

pub type BookingResult<T> = Result<T, BookingError>;
