use sqlx::PgPool;

use super::{page_offset, Page};
use crate::database::models::{BlogPost, BlogPostWithAuthor};
use crate::database::pool::DatabaseError;

#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub user_id: i64,
}

pub async fn insert(pool: &PgPool, new_post: &NewBlogPost) -> Result<BlogPost, DatabaseError> {
    let post = sqlx::query_as::<_, BlogPost>(
        r#"
        INSERT INTO blog_posts (title, content, excerpt, image_url, user_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&new_post.title)
    .bind(&new_post.content)
    .bind(&new_post.excerpt)
    .bind(&new_post.image_url)
    .bind(new_post.user_id)
    .fetch_one(pool)
    .await?;
    Ok(post)
}

/// Reverse-chronological page of the blog.
pub async fn list_page(pool: &PgPool, page: u32, per_page: u32) -> Result<Page<BlogPost>, DatabaseError> {
    let items = sqlx::query_as::<_, BlogPost>(
        "SELECT * FROM blog_posts ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(per_page as i64)
    .bind(page_offset(page, per_page))
    .fetch_all(pool)
    .await?;

    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blog_posts")
        .fetch_one(pool)
        .await?;

    Ok(Page::new(items, page, per_page, total.0))
}

/// Newest featured posts for the home view.
pub async fn featured(pool: &PgPool, limit: i64) -> Result<Vec<BlogPost>, DatabaseError> {
    let posts = sqlx::query_as::<_, BlogPost>(
        "SELECT * FROM blog_posts WHERE is_featured ORDER BY created_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(posts)
}

pub async fn find_by_id(pool: &PgPool, post_id: i64) -> Result<Option<BlogPost>, DatabaseError> {
    let post = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
        .bind(post_id)
        .fetch_optional(pool)
        .await?;
    Ok(post)
}

/// Post detail with the author's public identity joined in.
pub async fn find_with_author(
    pool: &PgPool,
    post_id: i64,
) -> Result<Option<BlogPostWithAuthor>, DatabaseError> {
    let post = sqlx::query_as::<_, BlogPostWithAuthor>(
        r#"
        SELECT p.*, u.handle AS author_handle, u.full_name AS author_name
        FROM blog_posts p
        JOIN users u ON u.id = p.user_id
        WHERE p.id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;
    Ok(post)
}

pub async fn by_user(pool: &PgPool, user_id: i64) -> Result<Vec<BlogPost>, DatabaseError> {
    let posts = sqlx::query_as::<_, BlogPost>(
        "SELECT * FROM blog_posts WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(posts)
}
