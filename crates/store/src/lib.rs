//! # Slotbook Store
//!
//! The stateful core of the booking engine: an in-memory, concurrency-safe
//! record of which slots are booked, plus the assembler that joins that
//! state with the generated grid into a day's schedule view.
//!
//! State lives for the process lifetime only. Durability would be a new
//! collaborator behind this same interface, not a change to it.

/// Day-schedule assembly from grid and store state
pub mod schedule;

use dashmap::DashSet;
use slotbook_core::errors::{BookingError, BookingResult};
use slotbook_core::models::slot::SlotKey;

/// Single source of truth for booking state, safe under concurrent access.
///
/// A slot is booked exactly when its key is present in the set; there are no
/// intermediate states and no metadata. Entries are only ever inserted —
/// booking is monotonic, and nothing in the engine unbooks a slot.
///
/// The set is sharded (`dashmap`), so bookings of different keys proceed
/// without contending on one global lock, and `try_book` is an atomic
/// insert-if-absent: of any number of concurrent calls for the same key,
/// exactly one wins.
#[derive(Debug, Default)]
pub struct BookingStore {
    booked: DashSet<SlotKey>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current booked state of a slot. Read-only and total; a read racing a
    /// booking of the same key observes either the pre- or post-booking
    /// state, never a torn value.
    pub fn is_booked(&self, key: &SlotKey) -> bool {
        self.booked.contains(key)
    }

    /// Atomically books the slot if it is still free.
    ///
    /// This is a compare-and-set, not a blind write: if the key is already
    /// present the call reports `AlreadyBooked` and leaves state untouched.
    pub fn try_book(&self, key: SlotKey) -> BookingResult<()> {
        if self.booked.insert(key) {
            Ok(())
        } else {
            Err(BookingError::AlreadyBooked(key.slot))
        }
    }

    /// Number of booked slots across all resources and days.
    pub fn booked_count(&self) -> usize {
        self.booked.len()
    }
}
