// handlers/protected/comments.rs - POST /add_comment/:post_id handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::database::repositories::{blog_posts, comments};
use crate::error::ApiError;
use crate::handlers::require_text;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Only `content` is read from the body. Any owner or user id supplied by
/// the client is ignored; the comment's author is always the token identity.
#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub content: Option<String>,
}

/// POST /add_comment/:post_id - Comment on a blog post.
///
/// 404 if the parent post does not exist.
pub async fn create(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<AddCommentRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut errors = HashMap::new();
    let content = require_text(&payload.content, "content", &mut errors);
    if !errors.is_empty() {
        return Err(ApiError::validation_error("Missing required fields", Some(errors)));
    }

    let post = blog_posts::find_by_id(&state.pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Blog post not found"))?;

    let new_comment = comments::NewComment {
        content,
        user_id: user.user_id,
        blog_post_id: post.id,
    };
    let comment = comments::insert(&state.pool, &new_comment).await?;

    tracing::info!(user_id = user.user_id, post_id = post.id, "comment added");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": comment })),
    ))
}
