// handlers/public/blog.rs - GET /blog and GET /blog/:id handlers

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::repositories::{blog_posts, comments};
use crate::error::ApiError;
use crate::state::AppState;

const PER_PAGE: u32 = 6;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

/// GET /blog?page=N - Blog listing, 6 per page, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let page = query.page.unwrap_or(1).max(1);
    let listing = blog_posts::list_page(&state.pool, page, PER_PAGE).await?;

    Ok(Json(json!({ "success": true, "data": listing })))
}

/// GET /blog/:id - Single post with its comments, newest comment first.
///
/// Expected Output:
/// ```json
/// {
///   "success": true,
///   "data": {
///     "post": { "id": 1, "title": "...", "author_handle": "...", ... },
///     "comments": [ { "content": "...", "author_handle": "...", ... } ]
///   }
/// }
/// ```
pub async fn show(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let post = blog_posts::find_with_author(&state.pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Blog post not found"))?;

    let post_comments = comments::for_post(&state.pool, post_id).await?;

    Ok(Json(json!({
        "success": true,
        "data": { "post": post, "comments": post_comments }
    })))
}
