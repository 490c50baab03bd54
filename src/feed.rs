//! Builds a calendar feed: authenticate, fetch, map, assemble

use chrono::{DateTime, Utc};

use crate::core::{Credentials, FeedError};
use crate::ical::{self, CalendarEvent, FeedMetadata};
use crate::strava::{self, FetchConfig, StravaClient};

/// Run the whole pipeline once. Either every matching activity ends up
/// in the returned document or an error is returned; partial feeds are
/// never produced.
///
/// The time window is enforced by Strava through the `after` query
/// parameter and not re-checked here.
pub async fn build_feed(
    client: &StravaClient,
    credentials: &Credentials,
    config: &FetchConfig,
    metadata: &FeedMetadata,
    now: DateTime<Utc>,
) -> Result<String, FeedError> {
    let token = strava::obtain_access_token(client, credentials).await?;
    let activities = strava::fetch_activities(client, token, config).await?;
    let events = activities
        .iter()
        .map(|activity| ical::to_event(activity, &metadata.summary_prefix, now))
        .collect::<Vec<CalendarEvent>>();
    Ok(ical::assemble(&events, metadata))
}
