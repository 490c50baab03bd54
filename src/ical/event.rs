//! Mapping from a Strava activity to a VEVENT

use chrono::{DateTime, Utc};

use super::text::{escape, format_duration, format_timestamp};
use crate::strava::Activity;

const UID_NAMESPACE: &str = "strava-ics";

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub uid: String,
    pub stamp: DateTime<Utc>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub summary: String,
    pub location: Option<String>,
    pub geo: Option<(f64, f64)>,
    pub description: String,
    pub url: String,
}

pub fn activity_url(id: u64) -> String {
    format!("https://www.strava.com/activities/{}", id)
}

/// Stable across requests so clients update events in place instead
/// of duplicating them.
pub fn activity_uid(id: u64) -> String {
    format!("{}@{}", id, UID_NAMESPACE)
}

/// Build the event for one activity. `stamp` is the generation time
/// and is the only input not derived from the activity.
pub fn to_event(activity: &Activity, summary_prefix: &str, stamp: DateTime<Utc>) -> CalendarEvent {
    let classification = activity.classification();
    let title = activity
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(classification);
    let url = activity_url(activity.id);

    let mut description = vec![
        format!("Type: {}", classification),
        format!("Distance: {:.2} km", activity.distance / 1000.0),
        format!("Moving: {}", format_duration(activity.moving_time)),
        format!("Elapsed: {}", format_duration(activity.elapsed_time)),
    ];
    if let Some(gain) = activity.total_elevation_gain.map(f64::round)
        && gain != 0.0
    {
        description.push(format!("Elevation: {:.0} m", gain));
    }
    description.push(url.clone());

    let location = [
        &activity.location_city,
        &activity.location_state,
        &activity.location_country,
    ]
    .into_iter()
    .filter_map(|part| part.as_deref().map(str::trim))
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>();

    CalendarEvent {
        uid: activity_uid(activity.id),
        stamp,
        start: activity.start_date,
        // The fetcher drops activities without a valid end
        end: activity.end_date().unwrap_or(activity.start_date),
        summary: format!("{}: {}", summary_prefix, title),
        location: (!location.is_empty()).then(|| location.join(", ")),
        geo: activity.start_coordinates(),
        description: description.join("\n"),
        url,
    }
}

impl CalendarEvent {
    /// Content lines from BEGIN:VEVENT to END:VEVENT
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![
            String::from("BEGIN:VEVENT"),
            format!("UID:{}", self.uid),
            format!("DTSTAMP:{}", format_timestamp(&self.stamp)),
            format!("DTSTART:{}", format_timestamp(&self.start)),
            format!("DTEND:{}", format_timestamp(&self.end)),
            format!("SUMMARY:{}", escape(&self.summary)),
        ];
        if let Some(location) = &self.location {
            lines.push(format!("LOCATION:{}", escape(location)));
        }
        if let Some((lat, lng)) = self.geo {
            lines.push(format!("GEO:{};{}", lat, lng));
        }
        lines.push(format!("DESCRIPTION:{}", escape(&self.description)));
        lines.push(format!("URL:{}", self.url));
        lines.push(String::from("END:VEVENT"));
        lines
    }

    pub fn to_ics(&self) -> String {
        self.to_lines().join("\r\n")
    }
}
