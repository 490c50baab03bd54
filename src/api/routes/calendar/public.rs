//! Public types for the calendar API
use serde::Deserialize;

/// Raw query parameters. Kept as strings so a malformed number falls
/// back to its default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    /// Comma separated sport types, e.g. `Run,TrailRun`
    pub sport: Option<String>,
    #[serde(rename = "sinceDays", alias = "since_days")]
    pub since_days: Option<String>,
    pub max: Option<String>,
}

pub const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// Short public caching so polling clients are cheap to serve
pub const FEED_CACHE_CONTROL: &str = "public, max-age=300, stale-while-revalidate=600";

/// Error calendars must not stick around in caches
pub const ERROR_CACHE_CONTROL: &str = "no-cache";
