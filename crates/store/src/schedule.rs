use chrono::NaiveDate;
use slotbook_core::grid::{self, OperatingWindow};
use slotbook_core::models::schedule::SlotEntry;
use slotbook_core::models::slot::{DoctorId, SlotKey, SlotStatus};

use crate::BookingStore;

/// Builds the availability view for one resource on one day.
///
/// Each label the grid produces is tagged with the store's current booked
/// state, in grid (chronological) order. Read-only; slots booked outside
/// the grid never appear here.
pub fn build_schedule(
    store: &BookingStore,
    window: &OperatingWindow,
    doctor: DoctorId,
    day: NaiveDate,
) -> Vec<SlotEntry> {
    grid::slot_labels(window)
        .into_iter()
        .map(|slot| SlotEntry {
            time: slot,
            status: if store.is_booked(&SlotKey::new(doctor, day, slot)) {
                SlotStatus::Booked
            } else {
                SlotStatus::Available
            },
        })
        .collect()
}
