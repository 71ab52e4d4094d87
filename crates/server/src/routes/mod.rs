pub mod boards;
pub mod columns;
pub mod tasks;

use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/api",
        boards::router()
            .merge(columns::router())
            .merge(tasks::router()),
    )
}
