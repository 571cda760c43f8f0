// handlers/protected/blog.rs - GET|POST /add_blog handlers

use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::database::repositories::blog_posts::{self, NewBlogPost};
use crate::error::ApiError;
use crate::handlers::{optional_text, require_text};
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
}

/// GET /add_blog - Describe the blog post form for API clients.
pub async fn describe() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "method": "POST",
            "fields": {
                "title": "string (required)",
                "content": "string (required)",
                "excerpt": "string (optional)",
                "image_url": "string (optional)"
            }
        }
    }))
}

/// POST /add_blog - Publish a blog post as the signed-in student.
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<AddBlogPostRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut errors = HashMap::new();
    let title = require_text(&payload.title, "title", &mut errors);
    let content = require_text(&payload.content, "content", &mut errors);
    if !errors.is_empty() {
        return Err(ApiError::validation_error("Missing required fields", Some(errors)));
    }

    let new_post = NewBlogPost {
        title,
        content,
        excerpt: optional_text(&payload.excerpt),
        image_url: optional_text(&payload.image_url),
        user_id: user.user_id,
    };
    let post = blog_posts::insert(&state.pool, &new_post).await?;

    tracing::info!(user_id = user.user_id, post_id = post.id, "blog post added");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": post })),
    ))
}
