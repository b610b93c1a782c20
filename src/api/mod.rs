pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod validation;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::utils::app_config::AppConfig;
use handlers::{expenses, health};

/// Build the application router with middleware layers applied.
///
/// The single resource route dispatches on method; every other method on it
/// falls through to the 405 handler. The CORS layer is outermost so the
/// fixed headers land on every response, errors included.
pub fn router(app_config: AppConfig) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/expenses",
            get(expenses::list_expenses)
                .post(expenses::create_expense)
                .options(expenses::preflight)
                .fallback(expenses::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::cors::apply_cors_headers))
        .with_state(app_config)
}
