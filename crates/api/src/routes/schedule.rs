use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/doctors/:doctor_id/schedule/:date",
            get(handlers::schedule::get_schedule),
        )
        .route(
            "/doctors/:doctor_id/schedule/:date/book",
            post(handlers::schedule::book_slot),
        )
}
