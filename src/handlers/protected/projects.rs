// handlers/protected/projects.rs - GET|POST /add_project handlers

use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::database::repositories::projects::{self, NewProject};
use crate::error::ApiError;
use crate::handlers::{optional_text, require_text};
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub technologies: Option<String>,
}

/// GET /add_project - Describe the project form for API clients.
pub async fn describe() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "method": "POST",
            "fields": {
                "title": "string (required)",
                "description": "string (required)",
                "image_url": "string (optional)",
                "github_url": "string (optional)",
                "demo_url": "string (optional)",
                "technologies": "string (optional, comma-separated tags)"
            }
        }
    }))
}

/// POST /add_project - Publish a project to the signed-in student's
/// portfolio.
///
/// Owner and creation timestamp are server-assigned; the featured flag is
/// never writable here.
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<AddProjectRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut errors = HashMap::new();
    let title = require_text(&payload.title, "title", &mut errors);
    let description = require_text(&payload.description, "description", &mut errors);
    if !errors.is_empty() {
        return Err(ApiError::validation_error("Missing required fields", Some(errors)));
    }

    let new_project = NewProject {
        title,
        description,
        image_url: optional_text(&payload.image_url),
        github_url: optional_text(&payload.github_url),
        demo_url: optional_text(&payload.demo_url),
        technologies: optional_text(&payload.technologies),
        user_id: user.user_id,
    };
    let project = projects::insert(&state.pool, &new_project).await?;

    tracing::info!(user_id = user.user_id, project_id = project.id, "project added");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": project })),
    ))
}
