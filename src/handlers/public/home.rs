// handlers/public/home.rs - GET / handler

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::database::repositories::{blog_posts, projects};
use crate::state::AppState;

const FEATURED_PROJECT_LIMIT: i64 = 6;
const FEATURED_POST_LIMIT: i64 = 3;

/// GET / - Landing view: newest featured projects and blog posts.
///
/// The featured flag is set manually (there is no write path for it); this
/// view only reads it. If the store is unreachable the landing page still
/// renders, with empty collections - the one route with that fallback.
///
/// Expected Output:
/// ```json
/// {
///   "success": true,
///   "data": {
///     "featured_projects": [ ... up to 6, newest first ... ],
///     "featured_posts": [ ... up to 3, newest first ... ]
///   }
/// }
/// ```
pub async fn home(State(state): State<AppState>) -> Json<Value> {
    let featured_projects = match projects::featured(&state.pool, FEATURED_PROJECT_LIMIT).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!("home view degraded, projects unavailable: {}", e);
            Vec::new()
        }
    };

    let featured_posts = match blog_posts::featured(&state.pool, FEATURED_POST_LIMIT).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!("home view degraded, blog posts unavailable: {}", e);
            Vec::new()
        }
    };

    Json(json!({
        "success": true,
        "data": {
            "featured_projects": featured_projects,
            "featured_posts": featured_posts,
        }
    }))
}
