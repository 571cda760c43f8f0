// handlers/public/auth/register.rs - GET|POST /register handlers

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::auth::password;
use crate::database::pool::DatabaseError;
use crate::database::repositories::users::{self, NewUser};
use crate::error::ApiError;
use crate::handlers::require_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub handle: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// GET /register - Describe the registration form for API clients.
pub async fn describe() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "method": "POST",
            "fields": {
                "handle": "string (required, unique)",
                "full_name": "string (required)",
                "email": "string (required, unique)",
                "password": "string (required)"
            }
        }
    }))
}

/// POST /register - Create a new student account
///
/// Expected Input:
/// ```json
/// {
///   "handle": "string",      // Required: unique student handle
///   "full_name": "string",   // Required
///   "email": "string",       // Required: unique
///   "password": "string"     // Required: hashed with Argon2id, never stored
/// }
/// ```
///
/// A taken handle fails with 409 DUPLICATE_HANDLE and creates no row. The
/// handle is checked up front; a concurrent duplicate insert still surfaces
/// as the same 409 through the unique constraint.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut errors = HashMap::new();
    let handle = require_text(&payload.handle, "handle", &mut errors);
    let full_name = require_text(&payload.full_name, "full_name", &mut errors);
    let email = require_text(&payload.email, "email", &mut errors);
    // Passwords are taken as-is, no trimming
    let submitted_password = payload.password.as_deref().unwrap_or("");
    if submitted_password.is_empty() {
        errors.insert("password".to_string(), "This field is required".to_string());
    }
    if !errors.is_empty() {
        return Err(ApiError::validation_error("Missing required fields", Some(errors)));
    }

    if users::handle_exists(&state.pool, &handle).await? {
        return Err(ApiError::duplicate_handle("Handle already registered"));
    }

    let password_hash = password::hash_password(submitted_password)
        .map_err(|_| ApiError::internal_server_error("Failed to process registration"))?;

    let new_user = NewUser { handle, full_name, email, password_hash };
    let user = users::insert(&state.pool, &new_user).await.map_err(|e| match e {
        DatabaseError::UniqueViolation(_) => {
            ApiError::duplicate_handle("Handle or email already registered")
        }
        other => other.into(),
    })?;

    tracing::info!(user_id = user.id, "registered new student");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": user })),
    ))
}
