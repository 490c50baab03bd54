//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::Router;

use strava_ics::api::AppState;
use strava_ics::api::app;
use strava_ics::core::AppConfig;

/// Config pointing both Strava endpoints at `strava_url`, usually a
/// `mockito` server.
pub fn test_config(strava_url: &str) -> AppConfig {
    AppConfig {
        strava_client_id: String::from("test_client_id"),
        strava_client_secret: String::from("test_client_secret"),
        strava_refresh_token: String::from("test_refresh_token"),
        strava_oauth_url: strava_url.to_string(),
        strava_api_url: strava_url.to_string(),
        strava_redirect_uri: String::from("http://localhost:2222/api/oauth/callback"),
        calendar_name: String::from("Strava Activities"),
        summary_prefix: String::from("Strava"),
    }
}

/// Creates a test application router for the given config.
pub fn test_app(config: AppConfig) -> Router {
    let app_state = AppState::new(config);
    app(Arc::new(RwLock::new(app_state)))
}
