//! Router for the OAuth callback

use std::sync::{Arc, RwLock};

use axum::{Router, http::StatusCode, response::Json};
use axum_extra::extract::Query;

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Echo the authorization code back so it can be exchanged for a
/// refresh token by hand. Nothing is stored.
async fn oauth_callback(
    Query(params): Query<public::OAuthCallbackQuery>,
) -> (StatusCode, Json<public::OAuthCallbackResponse>) {
    let status = if params.error.is_some() || params.code.is_none() {
        tracing::warn!("OAuth callback without a code: {:?}", params.error);
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    let resp = public::OAuthCallbackResponse {
        code: params.code,
        scope: params.scope,
        state: params.state,
        error: params.error,
    };
    (status, Json(resp))
}

/// Create the OAuth router
pub fn router() -> Router<SharedState> {
    Router::new().route("/callback", axum::routing::get(oauth_callback))
}
