use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    appointments::dto::{AppointmentListItem, CreateAppointmentRequest, CreatedAppointmentResponse},
    error::AppError,
    state::AppState,
};

/// Fixed listing bound; there is no paging.
pub const LIST_LIMIT: i64 = 50;

pub fn appointment_routes() -> Router<AppState> {
    Router::new().route(
        "/appointments",
        get(list_appointments).post(create_appointment),
    )
}

#[instrument(skip(state, payload))]
pub async fn create_appointment(
    State(state): State<AppState>,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedAppointmentResponse>), AppError> {
    let Json(payload) = payload?;
    let appt = state.appointments.create(payload.into()).await?;

    info!(
        appointment_id = appt.id,
        doctor_id = appt.doctor_id,
        patient_id = appt.patient_id,
        "appointment created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatedAppointmentResponse { id: appt.id }),
    ))
}

#[instrument(skip(state))]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentListItem>>, AppError> {
    let rows = state.appointments.list(LIST_LIMIT).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
