//! # Request Validation
//!
//! Translates the external date/time representations into internal types,
//! rejecting malformed input before it reaches the store or the schedule
//! assembler. Parsing is strictly canonical: only zero-padded
//! `"YYYY-MM-DD"` dates and `"HH:MM"` times are accepted.

use chrono::NaiveDate;

use crate::errors::{BookingError, BookingResult};
use crate::grid::OperatingWindow;
use crate::models::slot::SlotLabel;

/// Parses a canonical `"YYYY-MM-DD"` date.
///
/// Any deviation — wrong length, wrong separators, non-numeric fields, or a
/// calendar-invalid combination such as month 13 — is `InvalidDate`. No
/// timezone is accepted or inferred.
pub fn parse_day(raw: &str) -> BookingResult<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(BookingError::InvalidDate);
    }
    let year = numeric_field(&raw[0..4]).ok_or(BookingError::InvalidDate)?;
    let month = numeric_field(&raw[5..7]).ok_or(BookingError::InvalidDate)?;
    let day = numeric_field(&raw[8..10]).ok_or(BookingError::InvalidDate)?;
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(BookingError::InvalidDate)
}

/// Parses a canonical `"HH:MM"` 24-hour time into a slot label.
pub fn parse_time(raw: &str) -> BookingResult<SlotLabel> {
    raw.parse()
}

/// Rejects labels the schedule grid would never expose: outside the
/// operating window, or not aligned to the slot interval.
///
/// Without this check a syntactically valid time like `"17:07"` would be
/// booked under a key no schedule view ever shows.
pub fn ensure_on_grid(slot: SlotLabel, window: &OperatingWindow) -> BookingResult<()> {
    if slot < window.open() || slot >= window.close() {
        return Err(BookingError::OffGrid(slot));
    }
    let offset = (slot.time() - window.open().time()).num_minutes();
    if offset % i64::from(window.interval_minutes()) != 0 {
        return Err(BookingError::OffGrid(slot));
    }
    Ok(())
}

fn numeric_field(field: &str) -> Option<u32> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
