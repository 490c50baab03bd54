//! API routes module

pub mod calendar;
pub mod oauth;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Calendar feed, also under an `.ics` path for clients that
        // sniff the extension
        .nest("/calendar", calendar::router())
        .route(
            "/calendar.ics",
            axum::routing::get(calendar::calendar_handler),
        )
        // OAuth redirect target
        .nest("/oauth", oauth::router())
}
