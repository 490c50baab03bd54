//! Value formatting for iCalendar content lines (RFC 5545)

use chrono::{DateTime, Utc};

/// Escape a TEXT value. Backslashes go first so the escapes added for
/// the other characters aren't escaped again. CRLF and lone CR become
/// newlines so no raw CR ends up inside a content line.
pub fn escape(value: &str) -> String {
    value
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// UTC date-time form, e.g. `20240101T080000Z`
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// `HH:MM:SS`. Hours keep counting past 24.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Standard RFC 5545 TEXT unescaping
    fn unescape(value: &str) -> String {
        let mut out = String::new();
        let mut chars = value.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') | Some('N') => out.push('\n'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        }
        out
    }

    #[test]
    fn it_escapes_text_values() {
        assert_eq!(escape("plain text"), "plain text");
        assert_eq!(escape("a,b;c"), "a\\,b\\;c");
        assert_eq!(escape("line1\nline2"), "line1\\nline2");
        assert_eq!(escape("C:\\path"), "C:\\\\path");
        assert_eq!(escape("\\n"), "\\\\n");
        assert_eq!(escape("a\r\nb\rc"), "a\\nb\\nc");
    }

    #[test]
    fn it_round_trips_through_unescaping() {
        let inputs = [
            "Morning Run",
            "Hills, repeats; and more",
            "Type: Run\nDistance: 5.00 km",
            "back\\slash\\n, not a newline",
            "",
        ];
        for input in inputs {
            assert_eq!(unescape(&escape(input)), input);
        }
    }

    #[test]
    fn it_formats_timestamps() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        assert_eq!(format_timestamp(&instant), "20240101T080000Z");
        let instant = Utc.with_ymd_and_hms(987, 12, 31, 23, 59, 9).unwrap();
        assert_eq!(format_timestamp(&instant), "09871231T235909Z");
    }

    #[test]
    fn it_formats_durations() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(1830), "00:30:30");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(100 * 3600 + 5), "100:00:05");
    }
}
