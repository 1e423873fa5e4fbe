use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::appointments::repo_types::{Appointment, NewAppointment};

#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub doctor_id: i64,
    pub patient_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
}

impl From<CreateAppointmentRequest> for NewAppointment {
    fn from(r: CreateAppointmentRequest) -> Self {
        Self {
            doctor_id: r.doctor_id,
            patient_id: r.patient_id,
            start_time: r.start_time,
            end_time: r.end_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedAppointmentResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct AppointmentListItem {
    pub id: i64,
    pub doctor_id: i64,
    pub patient_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
}

impl From<Appointment> for AppointmentListItem {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            doctor_id: a.doctor_id,
            patient_id: a.patient_id,
            start_time: a.start_time,
            end_time: a.end_time,
        }
    }
}
