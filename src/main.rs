use anyhow::Result;
use strava_ics::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
