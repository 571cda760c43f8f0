use sqlx::PgPool;

use crate::database::models::User;
use crate::database::pool::{is_unique_violation, DatabaseError};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub handle: String,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}

pub async fn insert(pool: &PgPool, new_user: &NewUser) -> Result<User, DatabaseError> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (handle, password_hash, full_name, email)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&new_user.handle)
    .bind(&new_user.password_hash)
    .bind(&new_user.full_name)
    .bind(&new_user.email)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            DatabaseError::UniqueViolation("handle or email already registered".to_string())
        } else {
            e.into()
        }
    })
}

pub async fn find_by_handle(pool: &PgPool, handle: &str) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE handle = $1")
        .bind(handle)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_id(pool: &PgPool, user_id: i64) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn handle_exists(pool: &PgPool, handle: &str) -> Result<bool, DatabaseError> {
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE handle = $1)")
        .bind(handle)
        .fetch_one(pool)
        .await?;
    Ok(exists.0)
}
