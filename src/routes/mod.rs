use axum::{
    Router,
    routing::{get, patch, post},
};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

mod contact;
mod health;
mod status;

pub const SERVICE_NAME: &str = "Portfolio";

#[derive(Clone)]
pub struct AppState {
    pub command: folio_contact::Command,
    pub query: folio_contact::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            command: folio_contact::Command(pool.clone()),
            query: folio_contact::Query(pool.clone()),
            pool,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api", get(status::root))
        .route("/api/", get(status::root))
        .route("/api/status", get(status::list).post(status::create))
        .route("/api/contact", post(contact::submit))
        .route("/api/contacts", get(contact::list))
        .route("/api/contacts/{id}", get(contact::show))
        .route("/api/contacts/{id}/status", patch(contact::update_status))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
}
