use anyhow::{Result, bail};
use reqwest::Client;

use crate::core::AppConfig;
use crate::strava::{StravaClient, authorize_url};

/// Print the URL the athlete opens to grant access. Strava redirects
/// to the callback endpoint, which echoes the authorization code.
pub fn run() -> Result<()> {
    let config = AppConfig::default();
    if config.strava_client_id.is_empty() {
        bail!("Set STRAVA_CLIENT_ID in your environment");
    }

    let client = StravaClient::from_config(Client::new(), &config);
    let url = authorize_url(&client, &config.strava_client_id, &config.strava_redirect_uri);
    println!(
        "\nPlease open the following URL in your browser and authorize access:\n\n{}\n",
        url
    );
    println!(
        "Exchange the code it redirects with for a refresh token and set STRAVA_REFRESH_TOKEN."
    );

    Ok(())
}
