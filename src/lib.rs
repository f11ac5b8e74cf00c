pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The admin page is served on `/`; `/index.php` keeps old bookmarks working.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::bookings::show_page).post(handlers::bookings::submit),
        )
        .route(
            "/index.php",
            get(handlers::bookings::show_page).post(handlers::bookings::submit),
        )
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
