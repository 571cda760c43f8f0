use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub handle: String,
    /// Argon2id PHC string. Never serialized into a response.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub research_interests: Option<String>,
    pub contact_info: Option<String>,
    pub profile_image: Option<String>,
    pub joined_at: DateTime<Utc>,
}
