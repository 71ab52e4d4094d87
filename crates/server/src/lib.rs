pub mod error;
pub mod extract;
pub mod routes;

use axum::Router;
use db::DBService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: DBService,
}

impl AppState {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }
}

/// Full application router with middleware applied.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
