pub mod api;
pub mod cli;
pub mod core;
pub mod feed;
pub mod ical;
pub mod strava;
