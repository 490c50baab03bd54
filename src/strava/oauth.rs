//! Refresh-token exchange against the Strava OAuth endpoint

use serde::Deserialize;

use super::StravaClient;
use crate::core::error::body_snippet;
use crate::core::{Credentials, FeedError};

/// Short-lived bearer token. Not `Clone`: a token is moved into a
/// single fetch session and dropped with it.
#[derive(PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken([redacted])")
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange the refresh token for a fresh access token. Nothing is
/// cached; every call performs exactly one request, or none at all
/// when the credentials are incomplete.
pub async fn obtain_access_token(
    client: &StravaClient,
    credentials: &Credentials,
) -> Result<AccessToken, FeedError> {
    let missing = credentials.missing_fields();
    if !missing.is_empty() {
        return Err(FeedError::Configuration(missing));
    }

    let params = [
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("grant_type", "refresh_token"),
        ("refresh_token", credentials.refresh_token.as_str()),
    ];
    let url = format!("{}/oauth/token", client.oauth_url);
    let res = client.http.post(&url).form(&params).send().await?;
    let status = res.status();
    let text = res.text().await.unwrap_or_default();
    if !status.is_success() {
        return Err(FeedError::UpstreamAuth {
            status: status.as_u16(),
            body: body_snippet(&text),
        });
    }

    let token: TokenResponse = serde_json::from_str(&text)?;
    tracing::debug!("Obtained Strava access token");
    Ok(AccessToken(token.access_token))
}

/// URL the athlete opens once to grant read access to their
/// activities. The code Strava redirects back with is exchanged out of
/// band for the refresh token.
pub fn authorize_url(client: &StravaClient, client_id: &str, redirect_uri: &str) -> String {
    format!(
        "{}/oauth/authorize?client_id={}&redirect_uri={}&response_type=code&approval_prompt=force&scope={}",
        client.oauth_url,
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode("read,activity:read_all")
    )
}
