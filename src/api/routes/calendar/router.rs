//! Router for the calendar API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use http::header;

use super::public;
use crate::api::state::AppState;
use crate::feed::build_feed;
use crate::ical::{FeedMetadata, error_calendar};
use crate::strava::{FetchConfig, StravaClient};

type SharedState = Arc<RwLock<AppState>>;

fn calendar_response(body: String, cache_control: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, public::CALENDAR_CONTENT_TYPE),
            (header::CACHE_CONTROL, cache_control),
        ],
        body,
    )
        .into_response()
}

/// Serve the activity calendar. Failures are reported inside a valid
/// calendar rather than as an HTTP error since many clients drop a
/// subscription that stops parsing.
pub async fn calendar_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::CalendarQuery>,
) -> Response {
    let (client, credentials, metadata) = {
        let shared_state = state.read().expect("Unable to read share state");
        let config = &shared_state.config;
        (
            StravaClient::from_config(shared_state.http.clone(), config),
            config.credentials(),
            FeedMetadata::new(&config.calendar_name, &config.summary_prefix),
        )
    };

    let now = chrono::Utc::now();
    let fetch_config = FetchConfig::from_params(
        params.sport.as_deref(),
        params.since_days.as_deref(),
        params.max.as_deref(),
        now,
    );
    let metadata = match &fetch_config.type_allow_list {
        Some(sports) => metadata.with_sports(sports),
        None => metadata,
    };

    match build_feed(&client, &credentials, &fetch_config, &metadata, now).await {
        Ok(doc) => calendar_response(doc, public::FEED_CACHE_CONTROL),
        Err(err) => {
            tracing::error!("Serving error calendar: {}", err);
            let doc = error_calendar(&err.to_string(), &metadata, now);
            calendar_response(doc, public::ERROR_CACHE_CONTROL)
        }
    }
}

/// Create the calendar router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(calendar_handler))
}
