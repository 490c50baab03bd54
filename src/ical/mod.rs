//! iCalendar rendering of activities

pub mod event;
pub mod feed;
pub mod text;

pub use event::{CalendarEvent, to_event};
pub use feed::{FeedMetadata, assemble, error_calendar};
