//! VCALENDAR envelope around a list of events

use chrono::{DateTime, Duration, Utc};

use super::event::CalendarEvent;
use super::text::escape;

const PRODUCT_ID: &str = "-//strava-ics//Activity Calendar//EN";
const CRLF: &str = "\r\n";

/// Calendar-level fields for the envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedMetadata {
    pub name: String,
    pub summary_prefix: String,
}

impl FeedMetadata {
    pub fn new(name: &str, summary_prefix: &str) -> Self {
        Self {
            name: name.to_string(),
            summary_prefix: summary_prefix.to_string(),
        }
    }

    /// Suffix the calendar name with the sports it is filtered to so
    /// multiple subscriptions are distinguishable in a client.
    pub fn with_sports<'a>(mut self, sports: impl IntoIterator<Item = &'a String>) -> Self {
        let sports = sports
            .into_iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        if !sports.is_empty() {
            self.name = format!("{} ({})", self.name, sports.join(", "));
        }
        self
    }
}

fn header(metadata: &FeedMetadata) -> String {
    [
        String::from("BEGIN:VCALENDAR"),
        String::from("VERSION:2.0"),
        format!("PRODID:{}", PRODUCT_ID),
        String::from("CALSCALE:GREGORIAN"),
        String::from("METHOD:PUBLISH"),
        format!("NAME:{}", escape(&metadata.name)),
        format!("X-WR-CALNAME:{}", escape(&metadata.name)),
        String::from("X-WR-TIMEZONE:UTC"),
    ]
    .join(CRLF)
}

/// Render the complete document. Events keep the order they are
/// given in and every line, the last included, ends with CRLF.
///
/// Lines are not folded at 75 octets; the clients this feed targets
/// accept long lines.
pub fn assemble(events: &[CalendarEvent], metadata: &FeedMetadata) -> String {
    let mut blocks = Vec::with_capacity(events.len() + 2);
    blocks.push(header(metadata));
    blocks.extend(events.iter().map(CalendarEvent::to_ics));
    blocks.push(String::from("END:VCALENDAR"));

    let mut doc = blocks.join(CRLF);
    doc.push_str(CRLF);
    doc
}

/// Single-event calendar that carries an error message, served in
/// place of the feed so subscribed clients keep a parseable document.
pub fn error_calendar(message: &str, metadata: &FeedMetadata, now: DateTime<Utc>) -> String {
    let event = CalendarEvent {
        uid: format!("error-{}@strava-ics", now.timestamp()),
        stamp: now,
        start: now,
        end: now + Duration::hours(1),
        summary: format!("{}: feed error", metadata.summary_prefix),
        location: None,
        geo: None,
        description: message.to_string(),
        url: String::from("https://www.strava.com/dashboard"),
    };
    assemble(&[event], metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn metadata() -> FeedMetadata {
        FeedMetadata::new("Strava Activities", "Strava")
    }

    fn event(id: u64) -> CalendarEvent {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        CalendarEvent {
            uid: format!("{}@strava-ics", id),
            stamp: start,
            start,
            end: start + Duration::minutes(30),
            summary: format!("Strava: Run {}", id),
            location: None,
            geo: None,
            description: String::from("Type: Run"),
            url: format!("https://www.strava.com/activities/{}", id),
        }
    }

    #[test]
    fn it_renders_an_empty_calendar() {
        let doc = assemble(&[], &metadata());
        assert_eq!(
            doc,
            "BEGIN:VCALENDAR\r\n\
             VERSION:2.0\r\n\
             PRODID:-//strava-ics//Activity Calendar//EN\r\n\
             CALSCALE:GREGORIAN\r\n\
             METHOD:PUBLISH\r\n\
             NAME:Strava Activities\r\n\
             X-WR-CALNAME:Strava Activities\r\n\
             X-WR-TIMEZONE:UTC\r\n\
             END:VCALENDAR\r\n"
        );
        assert!(!doc.contains("VEVENT"));
    }

    #[test]
    fn it_keeps_event_order() {
        let doc = assemble(&[event(3), event(1), event(2)], &metadata());
        let uids: Vec<&str> = doc
            .split("\r\n")
            .filter_map(|line| line.strip_prefix("UID:"))
            .collect();
        assert_eq!(uids, vec!["3@strava-ics", "1@strava-ics", "2@strava-ics"]);
        assert!(doc.contains("END:VEVENT\r\nBEGIN:VEVENT"));
        assert!(doc.ends_with("END:VEVENT\r\nEND:VCALENDAR\r\n"));
    }

    #[test]
    fn it_uses_crlf_line_endings_only() {
        let doc = assemble(&[event(1)], &metadata());
        assert_eq!(doc.matches('\n').count(), doc.matches("\r\n").count());
        assert!(!doc.contains("\r\n\r\n"));
    }

    #[test]
    fn it_is_byte_identical_for_identical_input() {
        let events = [event(1), event(2)];
        assert_eq!(assemble(&events, &metadata()), assemble(&events, &metadata()));
    }

    #[test]
    fn it_names_filtered_calendars() {
        let sports = [String::from("ride"), String::from("run")];
        let metadata = metadata().with_sports(&sports);
        assert_eq!(metadata.name, "Strava Activities (ride, run)");
        let doc = assemble(&[], &metadata);
        assert!(doc.contains("X-WR-CALNAME:Strava Activities (ride\\, run)\r\n"));
    }

    #[test]
    fn it_renders_a_single_event_error_calendar() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let doc = error_calendar("Token exchange failed; status 401", &metadata(), now);
        assert_eq!(doc.matches("BEGIN:VEVENT").count(), 1);
        assert!(doc.contains("SUMMARY:Strava: feed error\r\n"));
        assert!(doc.contains("DESCRIPTION:Token exchange failed\\; status 401\r\n"));
        assert!(doc.contains("DTSTART:20240301T100000Z\r\n"));
        assert!(doc.contains("DTEND:20240301T110000Z\r\n"));
        assert!(doc.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(doc.ends_with("END:VCALENDAR\r\n"));
    }
}
