use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub blog_post_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Comment joined with its author's public identity, for the post view.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentWithAuthor {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub blog_post_id: i64,
    pub created_at: DateTime<Utc>,
    pub author_handle: String,
    pub author_name: String,
}
