// handlers/protected/dashboard.rs - GET /dashboard handler

use axum::{extract::State, response::Json, Extension};
use serde_json::{json, Value};

use crate::database::repositories::{blog_posts, projects, users};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /dashboard - The signed-in student's profile, projects, and posts,
/// newest first.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let profile = users::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Account no longer exists"))?;

    let own_projects = projects::by_user(&state.pool, user.user_id).await?;
    let own_posts = blog_posts::by_user(&state.pool, user.user_id).await?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "user": profile,
            "projects": own_projects,
            "posts": own_posts,
        }
    })))
}
