//! Errors raised while building an activity feed

use thiserror::Error;

/// Longest upstream body kept on an error for diagnostics
const BODY_SNIPPET_LEN: usize = 200;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Credentials are incomplete; raised before any request is sent
    #[error("Missing Strava credentials: {}", .0.join(", "))]
    Configuration(Vec<&'static str>),

    /// The refresh-token exchange was rejected
    #[error("Token exchange failed with status {status}: {body}")]
    UpstreamAuth { status: u16, body: String },

    /// A page of the activity list was rejected
    #[error("Activity page {page} failed with status {status}: {body}")]
    UpstreamFetch { page: u32, status: u16, body: String },

    #[error("Request to Strava failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from Strava: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Trim an upstream response body down to something fit for a log
/// line or a calendar description.
pub fn body_snippet(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_truncates_long_bodies() {
        let body = "x".repeat(500);
        let snippet = body_snippet(&body);
        assert_eq!(snippet.len(), BODY_SNIPPET_LEN + 3);
        assert!(snippet.ends_with("..."));
        assert_eq!(body_snippet("  short  "), "short");
    }

    #[test]
    fn it_formats_configuration_errors() {
        let err = FeedError::Configuration(vec!["client_id", "refresh_token"]);
        assert_eq!(
            err.to_string(),
            "Missing Strava credentials: client_id, refresh_token"
        );
    }
}
