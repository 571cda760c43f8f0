use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub is_featured: bool,
}

/// Post joined with its author's public identity, for the detail view.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BlogPostWithAuthor {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub is_featured: bool,
    pub author_handle: String,
    pub author_name: String,
}
