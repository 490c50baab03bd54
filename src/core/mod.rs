mod config;
pub mod error;

pub use config::{AppConfig, Credentials};
pub use error::FeedError;
