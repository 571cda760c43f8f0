use sqlx::PgPool;

use super::pool::DatabaseError;

/// Idempotent bootstrap DDL. Every statement is guarded with IF NOT EXISTS
/// so repeated startups against an initialized database are no-ops.
const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        handle VARCHAR(20) UNIQUE NOT NULL,
        password_hash TEXT NOT NULL,
        full_name VARCHAR(100) NOT NULL,
        email VARCHAR(120) UNIQUE NOT NULL,
        bio TEXT,
        research_interests TEXT,
        contact_info TEXT,
        profile_image VARCHAR(200),
        joined_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(200) NOT NULL,
        description TEXT NOT NULL,
        image_url VARCHAR(200),
        github_url VARCHAR(200),
        demo_url VARCHAR(200),
        technologies TEXT,
        user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        is_featured BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS blog_posts (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(200) NOT NULL,
        content TEXT NOT NULL,
        excerpt TEXT,
        image_url VARCHAR(200),
        user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        is_featured BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS comments (
        id BIGSERIAL PRIMARY KEY,
        content TEXT NOT NULL,
        user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        blog_post_id BIGINT NOT NULL REFERENCES blog_posts(id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_projects_user ON projects(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_projects_featured ON projects(is_featured, created_at)",
    "CREATE INDEX IF NOT EXISTS idx_blog_posts_user ON blog_posts(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_blog_posts_featured ON blog_posts(is_featured, created_at)",
    "CREATE INDEX IF NOT EXISTS idx_comments_post ON comments(blog_post_id)",
];

/// Ensure all entity tables exist. Safe to call on every startup.
pub async fn init_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    for statement in DDL {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
