//! # Slotbook Core
//!
//! Domain types and pure logic for the slot-booking engine. This crate has
//! no I/O and no shared state: it defines the identity of a bookable slot,
//! the error taxonomy surfaced to callers, the generator that derives a
//! day's slot grid from the configured operating window, and the strict
//! parsers that turn external date/time strings into internal types.
//!
//! Stateful booking lives in `slotbook-store`; the HTTP surface lives in
//! `slotbook-api`.

/// Caller-visible error taxonomy
pub mod errors;
/// Slot grid derivation from the operating window
pub mod grid;
/// Domain and API model types
pub mod models;
/// Strict parsing of external date/time representations
pub mod validate;
