//! Integration tests for the OAuth callback endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use strava_ics::api::public::oauth::OAuthCallbackResponse;

    use crate::test_utils::{test_app, test_config};

    /// Tests the callback echoes the authorization code
    #[tokio::test]
    async fn it_echoes_the_code() {
        let app = test_app(test_config("http://localhost:1"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/oauth/callback?state=&code=abc123&scope=read,activity:read_all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: OAuthCallbackResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code.as_deref(), Some("abc123"));
        assert_eq!(body.scope.as_deref(), Some("read,activity:read_all"));
        assert_eq!(body.error, None);
    }

    /// Tests a denied authorization returns 400 with the error
    #[tokio::test]
    async fn it_returns_400_when_access_is_denied() {
        let app = test_app(test_config("http://localhost:1"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/oauth/callback?state=&error=access_denied")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: OAuthCallbackResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error.as_deref(), Some("access_denied"));
        assert_eq!(body.code, None);
    }
}
