use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    appointments::repo_types::{Appointment, NewAppointment},
    error::AppError,
};

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn create(&self, new: NewAppointment) -> Result<Appointment, AppError>;
    /// Newest first, at most `limit` rows.
    async fn list(&self, limit: i64) -> Result<Vec<Appointment>, AppError>;
}

#[derive(Clone)]
pub struct PgAppointmentStore {
    db: PgPool,
}

impl PgAppointmentStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn create(&self, new: NewAppointment) -> Result<Appointment, AppError> {
        let appt = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (doctor_id, patient_id, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id, doctor_id, patient_id, start_time, end_time, created_at
            "#,
        )
        .bind(new.doctor_id)
        .bind(new.patient_id)
        .bind(new.start_time)
        .bind(new.end_time)
        .fetch_one(&self.db)
        .await?;
        Ok(appt)
    }

    async fn list(&self, limit: i64) -> Result<Vec<Appointment>, AppError> {
        let rows = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, doctor_id, patient_id, start_time, end_time, created_at
            FROM appointments
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
pub use memory::MemoryAppointmentStore;
