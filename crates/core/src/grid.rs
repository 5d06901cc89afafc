//! # Slot Grid Generation
//!
//! The slot space for a day is a pure function of the configured operating
//! window: labels start at the window's opening time and step by the
//! configured interval while strictly below the closing time. The grid is
//! cheap to derive and is recomputed on every use rather than cached.

use std::num::NonZeroU32;

use chrono::Duration;

use crate::models::slot::SlotLabel;

/// Process-wide scheduling window: daily opening and closing times plus the
/// fixed slot width.
///
/// The closing time is exclusive. The interval is both the duration of each
/// slot and the step between consecutive slot starts; `NonZeroU32` keeps the
/// `interval > 0` precondition out of runtime checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    open: SlotLabel,
    close: SlotLabel,
    interval_minutes: NonZeroU32,
}

impl OperatingWindow {
    pub fn new(open: SlotLabel, close: SlotLabel, interval_minutes: NonZeroU32) -> Self {
        Self {
            open,
            close,
            interval_minutes,
        }
    }

    pub fn open(&self) -> SlotLabel {
        self.open
    }

    pub fn close(&self) -> SlotLabel {
        self.close
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes.get()
    }
}

/// Produces the ordered slot labels for one day of the given window.
///
/// An empty window (`open >= close`) yields an empty vector. When the
/// interval does not evenly divide the window, the sequence simply stops
/// before the closing time; no partial slot is emitted. Stepping terminates
/// on midnight rollover rather than wrapping.
pub fn slot_labels(window: &OperatingWindow) -> Vec<SlotLabel> {
    let step = Duration::minutes(i64::from(window.interval_minutes()));
    let close = window.close().time();

    let mut labels = Vec::new();
    let mut cursor = window.open().time();
    while cursor < close {
        labels.push(SlotLabel::from_time(cursor));
        let (next, rollover) = cursor.overflowing_add_signed(step);
        if rollover != 0 {
            break;
        }
        cursor = next;
    }
    labels
}
