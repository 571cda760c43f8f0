use sqlx::PgPool;

use crate::services::chat_service::ChatService;

/// Request-scoped application context handed to every handler.
///
/// The pool is created once at startup and closed on shutdown; handlers
/// receive a clone of this struct through axum's `State` extractor instead
/// of reaching for process globals.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub chat: ChatService,
}

impl AppState {
    pub fn new(pool: PgPool, chat: ChatService) -> Self {
        Self { pool, chat }
    }
}
