use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use slotbook_core::errors::BookingError;
use slotbook_core::models::schedule::{BookSlotRequest, BookSlotResponse, GetScheduleResponse};
use slotbook_core::models::slot::{DoctorId, SlotKey, SlotStatus};
use slotbook_core::validate;
use tracing::info;

use crate::middleware::error_handling::AppError;
use crate::ApiState;

/// Returns every slot of the configured window for the given day, tagged
/// booked or available, in chronological order.
#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Path((doctor_id, date)): Path<(i64, String)>,
) -> Result<Json<GetScheduleResponse>, AppError> {
    let day = validate::parse_day(&date)?;
    let doctor = DoctorId(doctor_id);

    let schedule = slotbook_store::schedule::build_schedule(&state.store, &state.window, doctor, day);

    Ok(Json(GetScheduleResponse {
        doctor_id: doctor,
        date: day,
        schedule,
    }))
}

/// Books one slot for the given doctor and day.
///
/// The time must be canonical "HH:MM" and lie on the configured grid. The
/// booking itself is an atomic check-and-set in the store; a slot that is
/// already taken answers 409 rather than reporting a second success.
#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Path((doctor_id, date)): Path<(i64, String)>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<(StatusCode, Json<BookSlotResponse>), AppError> {
    let day = validate::parse_day(&date)?;
    let raw_time = payload.time.ok_or(BookingError::MissingTime)?;
    let slot = validate::parse_time(&raw_time)?;
    validate::ensure_on_grid(slot, &state.window)?;

    let doctor = DoctorId(doctor_id);
    state.store.try_book(SlotKey::new(doctor, day, slot))?;

    info!(doctor = %doctor, date = %day, time = %slot, "slot booked");

    Ok((
        StatusCode::CREATED,
        Json(BookSlotResponse {
            doctor_id: doctor,
            date: day,
            time: slot,
            status: SlotStatus::Booked,
        }),
    ))
}
