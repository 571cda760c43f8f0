// handlers/public/chat.rs - POST /api/chat handler

use axum::{extract::State, response::Json};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/chat - Proxy a question to the external Q&A service.
///
/// Expected Input:
/// ```json
/// { "question": "string" }   // Required, non-empty
/// ```
///
/// On upstream 200 the upstream JSON body is relayed verbatim (no envelope).
/// Failures map to: missing question -> 400, upstream timeout -> 408,
/// upstream non-200 -> that status, connection failure -> 500.
pub async fn chat(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    let question = body
        .as_ref()
        .and_then(|Json(payload)| payload.get("question"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Question is required"))?
        .to_string();

    let answer = state.chat.ask(&question).await?;
    Ok(Json(answer))
}
