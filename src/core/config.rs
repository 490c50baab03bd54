use std::env;
use std::fmt;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub strava_client_id: String,
    pub strava_client_secret: String,
    pub strava_refresh_token: String,
    pub strava_oauth_url: String,
    pub strava_api_url: String,
    pub strava_redirect_uri: String,
    pub calendar_name: String,
    pub summary_prefix: String,
}

impl AppConfig {
    /// Credentials for the refresh-token exchange. Built once and
    /// passed down explicitly rather than read from the environment
    /// deep in the call path.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.strava_client_id.clone(),
            client_secret: self.strava_client_secret.clone(),
            refresh_token: self.strava_refresh_token.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = "127.0.0.1";
        let port = "2222";
        // Missing credentials are rejected when a token is requested
        // so that the server can still answer with an error calendar.
        let strava_client_id = env::var("STRAVA_CLIENT_ID").unwrap_or_default();
        let strava_client_secret = env::var("STRAVA_CLIENT_SECRET").unwrap_or_default();
        let strava_refresh_token = env::var("STRAVA_REFRESH_TOKEN").unwrap_or_default();
        let strava_oauth_url =
            env::var("STRAVA_OAUTH_URL").unwrap_or_else(|_| "https://www.strava.com".to_string());
        let strava_api_url = env::var("STRAVA_API_URL")
            .unwrap_or_else(|_| "https://www.strava.com/api/v3".to_string());
        let strava_redirect_uri = env::var("STRAVA_REDIRECT_URI")
            .unwrap_or(format!("http://{}:{}/api/oauth/callback", host, port));
        let calendar_name = env::var("STRAVA_ICS_CALENDAR_NAME")
            .unwrap_or_else(|_| "Strava Activities".to_string());
        let summary_prefix =
            env::var("STRAVA_ICS_SUMMARY_PREFIX").unwrap_or_else(|_| "Strava".to_string());

        Self {
            strava_client_id,
            strava_client_secret,
            strava_refresh_token,
            strava_oauth_url,
            strava_api_url,
            strava_redirect_uri,
            calendar_name,
            summary_prefix,
        }
    }
}

/// Long-lived Strava app credentials plus the athlete's refresh token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Credentials {
    /// Names of the fields that are empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("refresh_token", &self.refresh_token),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("refresh_token", &"[redacted]")
            .finish()
    }
}
