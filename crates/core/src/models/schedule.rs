use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::slot::{DoctorId, SlotLabel, SlotStatus};

/// One row of a day's schedule view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub time: SlotLabel,
    pub status: SlotStatus,
}

/// Response body for `GET /doctors/:doctor_id/schedule/:date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetScheduleResponse {
    pub doctor_id: DoctorId,
    pub date: NaiveDate,
    pub schedule: Vec<SlotEntry>,
}

/// Request body for `POST /doctors/:doctor_id/schedule/:date/book`.
///
/// `time` stays a raw string so the validator owns the error message for
/// malformed values; `None` (field absent) is reported as `MissingTime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSlotRequest {
    #[serde(default)]
    pub time: Option<String>,
}

/// Response body echoed on a successful booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSlotResponse {
    pub doctor_id: DoctorId,
    pub date: NaiveDate,
    pub time: SlotLabel,
    pub status: SlotStatus,
}
