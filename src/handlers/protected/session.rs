// handlers/protected/session.rs - GET|POST /logout handler

use axum::{response::Json, Extension};
use serde_json::{json, Value};

use crate::middleware::AuthUser;

/// GET|POST /logout - End the session.
///
/// Tokens are stateless, so there is nothing to revoke server-side; the
/// event is logged and the client discards its copy of the token.
pub async fn logout(Extension(user): Extension<AuthUser>) -> Json<Value> {
    tracing::info!(user_id = user.user_id, "logout");

    Json(json!({
        "success": true,
        "data": { "message": "Logged out" }
    }))
}
