//! Paginated retrieval of the athlete's activities

use std::collections::BTreeSet;
use std::num::IntErrorKind;

use async_stream::try_stream;
use chrono::{DateTime, Duration, Utc};
use futures::{Stream, StreamExt, TryStreamExt, future};
use serde::Deserialize;

use super::{AccessToken, StravaClient};
use crate::core::FeedError;
use crate::core::error::body_snippet;

/// Records requested per page. Strava caps `per_page` at 200.
pub const PAGE_SIZE: u32 = 200;

const DEFAULT_SINCE_DAYS: i64 = 90;
const MAX_SINCE_DAYS: i64 = 365;
const DEFAULT_MAX_RESULTS: usize = 300;
const MAX_RESULTS_LIMIT: usize = 600;

/// Summary activity as returned by `GET /athlete/activities`. Only the
/// fields needed to render a calendar event are kept.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sport_type: Option<String>,
    /// Deprecated coarse type, used when `sport_type` is absent
    #[serde(default, rename = "type")]
    pub activity_type: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub elapsed_time: i64,
    #[serde(default)]
    pub moving_time: i64,
    /// Meters
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub total_elevation_gain: Option<f64>,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub location_country: Option<String>,
    /// `[lat, lng]`, or empty when the activity has no GPS data
    #[serde(default)]
    pub start_latlng: Option<Vec<f64>>,
}

impl Activity {
    /// Sport classification, e.g. `Run` or `TrailRun`
    pub fn classification(&self) -> &str {
        self.sport_type
            .as_deref()
            .or(self.activity_type.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or("Workout")
    }

    /// Start plus elapsed time, or `None` when that isn't a
    /// representable instant.
    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        Duration::try_seconds(self.elapsed_time.max(0))
            .and_then(|elapsed| self.start_date.checked_add_signed(elapsed))
    }

    pub fn start_coordinates(&self) -> Option<(f64, f64)> {
        match self.start_latlng.as_deref() {
            Some([lat, lng]) => Some((*lat, *lng)),
            _ => None,
        }
    }
}

/// What to fetch for one feed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Only activities starting after this instant are requested
    pub cutoff_epoch_seconds: i64,
    /// Lowercased classifications to keep. `None` keeps everything.
    pub type_allow_list: Option<BTreeSet<String>>,
    /// Upper bound on activities returned, counted after filtering
    pub max_results: usize,
}

impl FetchConfig {
    /// Build from raw query parameter values. Values that don't parse
    /// fall back to their defaults, numeric values are clamped.
    pub fn from_params(
        sport: Option<&str>,
        since_days: Option<&str>,
        max: Option<&str>,
        now: DateTime<Utc>,
    ) -> Self {
        let since_days = since_days
            .and_then(parse_saturating)
            .unwrap_or(DEFAULT_SINCE_DAYS)
            .clamp(1, MAX_SINCE_DAYS);
        let max_results = max
            .and_then(parse_saturating)
            .map(|n| n.clamp(1, MAX_RESULTS_LIMIT as i64) as usize)
            .unwrap_or(DEFAULT_MAX_RESULTS);
        let type_allow_list = sport
            .map(|s| {
                s.split(',')
                    .map(|t| t.trim().to_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect::<BTreeSet<_>>()
            })
            .filter(|set| !set.is_empty());

        Self {
            cutoff_epoch_seconds: (now - Duration::days(since_days)).timestamp(),
            type_allow_list,
            max_results,
        }
    }

    pub fn allows(&self, activity: &Activity) -> bool {
        match &self.type_allow_list {
            Some(allowed) => allowed.contains(&activity.classification().to_lowercase()),
            None => true,
        }
    }
}

/// Parse an integer, saturating values that overflow `i64` so they
/// clamp like any other out of range number.
fn parse_saturating(value: &str) -> Option<i64> {
    match value.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

async fn fetch_page(
    client: &StravaClient,
    token: &AccessToken,
    after: i64,
    page: u32,
) -> Result<Vec<serde_json::Value>, FeedError> {
    let url = format!("{}/athlete/activities", client.api_url);
    tracing::debug!("Fetching activity page {}", page);
    let res = client
        .http
        .get(&url)
        .bearer_auth(token.secret())
        .query(&[
            ("after", after.to_string()),
            ("page", page.to_string()),
            ("per_page", PAGE_SIZE.to_string()),
        ])
        .send()
        .await?;
    let status = res.status();
    let text = res.text().await.unwrap_or_default();
    if !status.is_success() {
        return Err(FeedError::UpstreamFetch {
            page,
            status: status.as_u16(),
            body: body_snippet(&text),
        });
    }
    let records: Vec<serde_json::Value> = serde_json::from_str(&text)?;
    Ok(records)
}

/// Lazily page through the activity list, newest first. The next page
/// is only requested once every activity of the current one has been
/// consumed, and an empty page ends the stream.
///
/// Records that don't deserialize, or whose end time can't be
/// represented, are logged and skipped.
pub fn activity_stream<'a>(
    client: &'a StravaClient,
    token: &'a AccessToken,
    after: i64,
) -> impl Stream<Item = Result<Activity, FeedError>> + 'a {
    try_stream! {
        let mut page: u32 = 1;
        loop {
            let records = fetch_page(client, token, after, page).await?;
            if records.is_empty() {
                tracing::debug!("Activity page {} is empty, done", page);
                break;
            }
            for record in records {
                match serde_json::from_value::<Activity>(record) {
                    Ok(activity) if activity.end_date().is_none() => tracing::warn!(
                        "Skipping activity {} on page {}: elapsed time {} out of range",
                        activity.id,
                        page,
                        activity.elapsed_time
                    ),
                    Ok(activity) => yield activity,
                    Err(e) => tracing::warn!("Skipping malformed activity on page {}: {}", page, e),
                }
            }
            page += 1;
        }
    }
}

/// Fetch up to `config.max_results` activities matching the allow
/// list. Any failed page aborts the whole fetch.
pub async fn fetch_activities(
    client: &StravaClient,
    token: AccessToken,
    config: &FetchConfig,
) -> Result<Vec<Activity>, FeedError> {
    let activities = activity_stream(client, &token, config.cutoff_epoch_seconds)
        .try_filter(|activity| future::ready(config.allows(activity)))
        .take(config.max_results)
        .try_collect::<Vec<_>>()
        .await?;

    tracing::info!("Fetched {} activities", activities.len());
    Ok(activities)
}
