//! Strava API client: refresh-token exchange and the athlete activity list

mod activities;
mod oauth;

pub use activities::{Activity, FetchConfig, PAGE_SIZE, activity_stream, fetch_activities};
pub use oauth::{AccessToken, authorize_url, obtain_access_token};

use reqwest::Client;

use crate::core::AppConfig;

/// Base URLs and HTTP client for talking to Strava. Tests point the
/// URLs at a mock server.
#[derive(Clone, Debug)]
pub struct StravaClient {
    pub http: Client,
    pub oauth_url: String,
    pub api_url: String,
}

impl StravaClient {
    pub fn new(http: Client, oauth_url: &str, api_url: &str) -> Self {
        Self {
            http,
            oauth_url: oauth_url.trim_end_matches('/').to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(http: Client, config: &AppConfig) -> Self {
        Self::new(http, &config.strava_oauth_url, &config.strava_api_url)
    }
}
