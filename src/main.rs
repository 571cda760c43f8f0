use anyhow::Context;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use campus_hub_rust::services::chat_service::ChatService;
use campus_hub_rust::state::AppState;
use campus_hub_rust::{config, database, handlers, middleware};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, SECRET_KEY, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Campus Hub API in {:?} mode", config.environment);

    let pool = database::pool::connect(config).context("invalid database configuration")?;

    // Best-effort: the process still comes up if the store is unreachable,
    // serving /health and the degraded home view until it recovers.
    match database::schema::init_schema(&pool).await {
        Ok(()) => tracing::info!("Database tables created successfully"),
        Err(e) => tracing::error!("Database initialization error: {}", e),
    }

    let state = AppState::new(pool.clone(), ChatService::from_config(&config.chat));
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Campus Hub API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    database::pool::close(&pool).await;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Public views, account endpoints, chat proxy
        .merge(public_routes())
        // Token-guarded content mutation and dashboard
        .merge(protected_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use handlers::public::{auth, blog, chat, home, projects, students};

    Router::new()
        .route("/", get(home::home))
        .route("/projects", get(projects::list))
        .route("/blog", get(blog::list))
        .route("/blog/:post_id", get(blog::show))
        .route("/student/:user_id", get(students::show))
        .route("/login", get(auth::login::describe).post(auth::login::login))
        .route("/register", get(auth::register::describe).post(auth::register::register))
        .route("/api/chat", post(chat::chat))
}

fn protected_routes() -> Router<AppState> {
    use handlers::protected::{blog, comments, dashboard, projects, session};

    Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route("/add_project", get(projects::describe).post(projects::create))
        .route("/add_blog", get(blog::describe).post(blog::create))
        .route("/add_comment/:post_id", post(comments::create))
        .route("/logout", get(session::logout).post(session::logout))
        .layer(from_fn(middleware::require_auth))
}

/// GET /health - constant liveness payload, independent of the database.
async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "status": "healthy",
        "message": "Campus Hub API is running"
    }))
}
