// handlers/public/auth/login.rs - GET|POST /login handlers

use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::auth::{self, password, Claims};
use crate::database::repositories::users;
use crate::error::ApiError;
use crate::handlers::require_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub handle: Option<String>,
    pub password: Option<String>,
}

/// GET /login - Describe the login form for API clients.
pub async fn describe() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "method": "POST",
            "fields": {
                "handle": "string (required)",
                "password": "string (required)"
            }
        }
    }))
}

/// POST /login - Authenticate and receive a session token
///
/// Expected Input:
/// ```json
/// {
///   "handle": "string",     // Required: student handle
///   "password": "string"    // Required
/// }
/// ```
///
/// Expected Output (Success):
/// ```json
/// {
///   "success": true,
///   "data": {
///     "token": "eyJhbGciOiJIUzI1NiI...",
///     "user": { "id": 1, "handle": "jdoe", "full_name": "Jane Doe", ... },
///     "expires_in": 604800
///   }
/// }
/// ```
///
/// Unknown handle and wrong password produce the same generic 401 so
/// handles cannot be enumerated.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut errors = HashMap::new();
    let handle = require_text(&payload.handle, "handle", &mut errors);
    // Passwords are taken as-is, no trimming
    let submitted_password = payload.password.as_deref().unwrap_or("");
    if submitted_password.is_empty() {
        errors.insert("password".to_string(), "This field is required".to_string());
    }
    if !errors.is_empty() {
        return Err(ApiError::validation_error("Missing required fields", Some(errors)));
    }

    let user = match users::find_by_handle(&state.pool, &handle).await? {
        Some(user) if password::verify_password(submitted_password, &user.password_hash) => user,
        _ => return Err(ApiError::unauthorized("Invalid handle or password")),
    };

    let claims = Claims::new(user.id, user.handle.clone());
    let token = auth::generate_token(&claims)?;

    tracing::info!(user_id = user.id, "login succeeded");

    Ok(Json(json!({
        "success": true,
        "data": {
            "token": token,
            "user": user,
            "expires_in": claims.expires_in(),
        }
    })))
}
