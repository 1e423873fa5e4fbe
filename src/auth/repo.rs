use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::{auth::repo_types::User, db::is_unique_violation, error::AppError};

/// Persistence for user accounts.
///
/// `create` is the authoritative uniqueness guard: callers may pre-check with
/// `find_by_email`, but only `create` decides whether an email is taken.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, email: &str, password_hash: &str, role: &str) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, email: &str, password_hash: &str, role: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, role, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.db)
        .await
        .map_err(|e| insert_error(email, e))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, email, password_hash, role, created_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}

/// A unique violation on insert means the email is taken.
fn insert_error(email: &str, e: sqlx::Error) -> AppError {
    if is_unique_violation(&e) {
        debug!(%email, "users.email unique constraint hit");
        AppError::DuplicateEmail
    } else {
        e.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::db_error;

    #[test]
    fn unique_violation_on_insert_is_duplicate_email() {
        let err = insert_error("a@x.com", db_error("23505"));
        assert!(matches!(err, AppError::DuplicateEmail));
    }

    #[test]
    fn other_insert_failures_are_internal() {
        // not_null_violation
        let err = insert_error("a@x.com", db_error("23502"));
        assert!(matches!(err, AppError::Internal(_)));

        let err = insert_error("a@x.com", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Internal(_)));
    }
}

#[cfg(test)]
pub use memory::MemoryUserStore;
