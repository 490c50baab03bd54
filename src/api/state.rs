use reqwest::Client;

use crate::core::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    // Shared so connections to Strava are pooled across requests
    pub http: Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}
