use sqlx::PgPool;

use crate::database::models::{Comment, CommentWithAuthor};
use crate::database::pool::DatabaseError;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub user_id: i64,
    pub blog_post_id: i64,
}

pub async fn insert(pool: &PgPool, new_comment: &NewComment) -> Result<Comment, DatabaseError> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (content, user_id, blog_post_id)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(&new_comment.content)
    .bind(new_comment.user_id)
    .bind(new_comment.blog_post_id)
    .fetch_one(pool)
    .await?;
    Ok(comment)
}

/// All comments on a post, newest first, with author identity joined in.
pub async fn for_post(pool: &PgPool, post_id: i64) -> Result<Vec<CommentWithAuthor>, DatabaseError> {
    let comments = sqlx::query_as::<_, CommentWithAuthor>(
        r#"
        SELECT c.*, u.handle AS author_handle, u.full_name AS author_name
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.blog_post_id = $1
        ORDER BY c.created_at DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;
    Ok(comments)
}
