use sqlx::FromRow;
use time::OffsetDateTime;

pub const DEFAULT_ROLE: &str = "patient";

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String, // Argon2 PHC string
    pub role: String,          // free-form, not enforced
    pub created_at: OffsetDateTime,
}
