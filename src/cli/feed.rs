use anyhow::Result;
use reqwest::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::AppConfig;
use crate::feed::build_feed;
use crate::ical::FeedMetadata;
use crate::strava::{FetchConfig, StravaClient};

pub async fn run(
    sport: Option<String>,
    since_days: Option<String>,
    max: Option<String>,
) -> Result<()> {
    // Logs go to stderr so the calendar on stdout can be redirected
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::default();
    let client = StravaClient::from_config(Client::new(), &config);
    let now = chrono::Utc::now();
    let fetch_config = FetchConfig::from_params(
        sport.as_deref(),
        since_days.as_deref(),
        max.as_deref(),
        now,
    );
    let mut metadata = FeedMetadata::new(&config.calendar_name, &config.summary_prefix);
    if let Some(sports) = &fetch_config.type_allow_list {
        metadata = metadata.with_sports(sports);
    }

    let doc = build_feed(&client, &config.credentials(), &fetch_config, &metadata, now).await?;
    print!("{}", doc);

    Ok(())
}
