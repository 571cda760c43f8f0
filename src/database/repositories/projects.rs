use sqlx::PgPool;

use super::{page_offset, Page};
use crate::database::models::Project;
use crate::database::pool::DatabaseError;

#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub technologies: Option<String>,
    pub user_id: i64,
}

pub async fn insert(pool: &PgPool, new_project: &NewProject) -> Result<Project, DatabaseError> {
    let project = sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (title, description, image_url, github_url, demo_url, technologies, user_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&new_project.title)
    .bind(&new_project.description)
    .bind(&new_project.image_url)
    .bind(&new_project.github_url)
    .bind(&new_project.demo_url)
    .bind(&new_project.technologies)
    .bind(new_project.user_id)
    .fetch_one(pool)
    .await?;
    Ok(project)
}

/// Reverse-chronological page of the project directory.
pub async fn list_page(pool: &PgPool, page: u32, per_page: u32) -> Result<Page<Project>, DatabaseError> {
    let items = sqlx::query_as::<_, Project>(
        "SELECT * FROM projects ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(per_page as i64)
    .bind(page_offset(page, per_page))
    .fetch_all(pool)
    .await?;

    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;

    Ok(Page::new(items, page, per_page, total.0))
}

/// Newest featured projects for the home view.
pub async fn featured(pool: &PgPool, limit: i64) -> Result<Vec<Project>, DatabaseError> {
    let projects = sqlx::query_as::<_, Project>(
        "SELECT * FROM projects WHERE is_featured ORDER BY created_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(projects)
}

pub async fn by_user(pool: &PgPool, user_id: i64) -> Result<Vec<Project>, DatabaseError> {
    let projects = sqlx::query_as::<_, Project>(
        "SELECT * FROM projects WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(projects)
}
