use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{from_str, json, to_string, to_value};
use slotbook_core::models::schedule::{BookSlotRequest, BookSlotResponse, GetScheduleResponse, SlotEntry};
use slotbook_core::models::slot::{DoctorId, SlotKey, SlotLabel, SlotStatus};

fn label(hour: u32, minute: u32) -> SlotLabel {
    SlotLabel::new(hour, minute).unwrap()
}

#[test]
fn slot_label_displays_zero_padded() {
    assert_eq!(label(9, 5).to_string(), "09:05");
    assert_eq!(label(17, 15).to_string(), "17:15");
    assert_eq!(label(0, 0).to_string(), "00:00");
}

#[test]
fn slot_label_serializes_as_canonical_string() {
    assert_eq!(to_string(&label(17, 15)).unwrap(), "\"17:15\"");

    let parsed: SlotLabel = from_str("\"17:15\"").unwrap();
    assert_eq!(parsed, label(17, 15));
}

#[test]
fn slot_label_deserialization_rejects_non_canonical_strings() {
    assert!(from_str::<SlotLabel>("\"7:05\"").is_err());
    assert!(from_str::<SlotLabel>("\"25:00\"").is_err());
}

#[test]
fn slot_labels_order_chronologically() {
    assert!(label(17, 0) < label(17, 15));
    assert!(label(9, 59) < label(10, 0));
}

#[test]
fn doctor_id_is_serde_transparent() {
    assert_eq!(to_string(&DoctorId(7)).unwrap(), "7");

    let parsed: DoctorId = from_str("7").unwrap();
    assert_eq!(parsed, DoctorId(7));
}

#[test]
fn equal_slot_keys_identify_the_same_slot() {
    let day = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
    let a = SlotKey::new(DoctorId(1), day, label(17, 15));
    let b = SlotKey::new(DoctorId(1), day, label(17, 15));

    assert_eq!(a, b);
    assert_ne!(a, SlotKey::new(DoctorId(2), day, label(17, 15)));
    assert_ne!(a, SlotKey::new(DoctorId(1), day, label(17, 30)));
}

#[test]
fn schedule_response_serializes_to_the_wire_shape() {
    let response = GetScheduleResponse {
        doctor_id: DoctorId(1),
        date: NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
        schedule: vec![
            SlotEntry {
                time: label(17, 0),
                status: SlotStatus::Available,
            },
            SlotEntry {
                time: label(17, 15),
                status: SlotStatus::Booked,
            },
        ],
    };

    assert_eq!(
        to_value(&response).unwrap(),
        json!({
            "doctor_id": 1,
            "date": "2024-12-30",
            "schedule": [
                { "time": "17:00", "status": "available" },
                { "time": "17:15", "status": "booked" },
            ],
        })
    );
}

#[test]
fn book_request_tolerates_a_missing_time_field() {
    let empty: BookSlotRequest = from_str("{}").unwrap();
    assert_eq!(empty.time, None);

    let with_time: BookSlotRequest = from_str(r#"{"time": "17:15"}"#).unwrap();
    assert_eq!(with_time.time.as_deref(), Some("17:15"));
}

#[test]
fn booking_response_echoes_the_booked_slot() {
    let response = BookSlotResponse {
        doctor_id: DoctorId(1),
        date: NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
        time: label(17, 15),
        status: SlotStatus::Booked,
    };

    assert_eq!(
        to_value(&response).unwrap(),
        json!({
            "doctor_id": 1,
            "date": "2024-12-30",
            "time": "17:15",
            "status": "booked",
        })
    );
}
