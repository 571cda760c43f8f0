// handlers/public/projects.rs - GET /projects handler

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::repositories::projects;
use crate::error::ApiError;
use crate::state::AppState;

const PER_PAGE: u32 = 9;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

/// GET /projects?page=N - Project directory, 9 per page, newest first.
///
/// A page past the end returns an empty `items` list, never an error.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let page = query.page.unwrap_or(1).max(1);
    let listing = projects::list_page(&state.pool, page, PER_PAGE).await?;

    Ok(Json(json!({ "success": true, "data": listing })))
}
