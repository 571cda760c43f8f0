// handlers/public/students.rs - GET /student/:id handler

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::database::repositories::{projects, users};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /student/:id - Public student profile plus their projects.
///
/// The profile record never includes the password hash; 404 if the student
/// does not exist.
pub async fn show(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let student = users::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    let student_projects = projects::by_user(&state.pool, user_id).await?;

    Ok(Json(json!({
        "success": true,
        "data": { "student": student, "projects": student_projects }
    })))
}
