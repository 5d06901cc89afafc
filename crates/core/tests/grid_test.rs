use std::num::NonZeroU32;

use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::grid::{slot_labels, OperatingWindow};
use slotbook_core::models::slot::SlotLabel;

fn label(hour: u32, minute: u32) -> SlotLabel {
    SlotLabel::new(hour, minute).unwrap()
}

fn window(open: (u32, u32), close: (u32, u32), interval: u32) -> OperatingWindow {
    OperatingWindow::new(
        label(open.0, open.1),
        label(close.0, close.1),
        NonZeroU32::new(interval).unwrap(),
    )
}

#[test]
fn default_clinic_window_produces_twenty_slots() {
    let labels = slot_labels(&window((17, 0), (22, 0), 15));

    assert_eq!(labels.len(), 20);
    assert_eq!(labels.first().unwrap().to_string(), "17:00");
    assert_eq!(labels.last().unwrap().to_string(), "21:45");
}

#[test]
fn first_slot_is_the_opening_time() {
    let labels = slot_labels(&window((9, 30), (12, 0), 20));

    assert_eq!(labels[0], label(9, 30));
}

#[test]
fn consecutive_slots_differ_by_exactly_the_interval() {
    let labels = slot_labels(&window((17, 0), (22, 0), 15));

    for pair in labels.windows(2) {
        let gap = pair[1].time() - pair[0].time();
        assert_eq!(gap.num_minutes(), 15);
    }
}

#[rstest]
#[case((9, 0), (10, 0), 15, 4)]
#[case((9, 0), (10, 0), 60, 1)]
#[case((9, 0), (9, 1), 15, 1)]
// An interval that does not divide the window stops short of the close;
// no partial slot is emitted.
#[case((9, 0), (10, 0), 45, 2)]
#[case((0, 0), (23, 59), 60, 24)]
fn slot_count_matches_the_window(
    #[case] open: (u32, u32),
    #[case] close: (u32, u32),
    #[case] interval: u32,
    #[case] expected: usize,
) {
    assert_eq!(slot_labels(&window(open, close, interval)).len(), expected);
}

#[rstest]
#[case((22, 0), (17, 0))]
#[case((17, 0), (17, 0))]
fn inverted_or_empty_window_yields_no_slots(#[case] open: (u32, u32), #[case] close: (u32, u32)) {
    assert_eq!(slot_labels(&window(open, close, 15)), Vec::new());
}

#[test]
fn generation_stops_at_midnight_instead_of_wrapping() {
    let labels = slot_labels(&window((23, 0), (23, 59), 30));

    assert_eq!(labels, vec![label(23, 0), label(23, 30)]);
}

#[test]
fn regeneration_is_deterministic() {
    let w = window((17, 0), (22, 0), 15);

    assert_eq!(slot_labels(&w), slot_labels(&w));
}
