use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::BookingError;

/// Opaque identifier of a bookable resource.
///
/// Supplied by the caller and never validated for existence; there is no
/// doctor registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(pub i64);

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A time-of-day at minute granularity, the start of one slot.
///
/// Canonical textual form is zero-padded 24-hour `"HH:MM"`, which is what
/// `Display`, `FromStr`, and the serde impls all speak. The wrapped time
/// always has zero seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotLabel(NaiveTime);

impl SlotLabel {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(SlotLabel)
    }

    /// Wraps a time already known to be minute-granular (grid stepping
    /// preserves this).
    pub(crate) fn from_time(time: NaiveTime) -> Self {
        debug_assert_eq!(time.second(), 0);
        SlotLabel(time)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for SlotLabel {
    type Err = BookingError;

    /// Strictly canonical parse: exactly `"HH:MM"`, both fields zero-padded
    /// two-digit numbers, hour <= 23, minute <= 59. Lax forms like `"7:05"`
    /// are rejected.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let bytes = raw.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(BookingError::InvalidTime);
        }
        let hour = two_digit_field(&raw[0..2]).ok_or(BookingError::InvalidTime)?;
        let minute = two_digit_field(&raw[3..5]).ok_or(BookingError::InvalidTime)?;
        SlotLabel::new(hour, minute).ok_or(BookingError::InvalidTime)
    }
}

impl Serialize for SlotLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn two_digit_field(field: &str) -> Option<u32> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Unique identity of a bookable unit: one resource, one day, one slot.
///
/// Two bookings with equal keys refer to the same physical slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub doctor: DoctorId,
    pub day: NaiveDate,
    pub slot: SlotLabel,
}

impl SlotKey {
    pub fn new(doctor: DoctorId, day: NaiveDate, slot: SlotLabel) -> Self {
        Self { doctor, day, slot }
    }
}

/// Booked state of a slot as shown in a schedule view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
}
