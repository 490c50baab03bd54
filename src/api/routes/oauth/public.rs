//! Public types for the OAuth callback
use serde::{Deserialize, Serialize};

/// Parameters Strava appends when redirecting back after the athlete
/// approves (or denies) access
#[derive(Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub scope: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct OAuthCallbackResponse {
    pub code: Option<String>,
    pub scope: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}
