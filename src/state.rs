use std::sync::Arc;

use crate::{
    appointments::repo::{AppointmentStore, PgAppointmentStore},
    auth::repo::{PgUserStore, UserStore},
    config::AppConfig,
    db,
};

/// Shared handles passed to every handler; there is no global DB handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub appointments: Arc<dyn AppointmentStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let pool = db::connect(&config.database_url).await?;
        db::migrate(&pool).await?;

        Ok(Self::from_parts(
            config,
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgAppointmentStore::new(pool)),
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        appointments: Arc<dyn AppointmentStore>,
    ) -> Self {
        Self {
            config,
            users,
            appointments,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::fake_with_config(Arc::new(AppConfig::for_tests()))
    }

    #[cfg(test)]
    pub fn fake_with_config(config: Arc<AppConfig>) -> Self {
        use crate::{appointments::repo::MemoryAppointmentStore, auth::repo::MemoryUserStore};

        Self::from_parts(
            config,
            Arc::new(MemoryUserStore::default()),
            Arc::new(MemoryAppointmentStore::default()),
        )
    }
}
