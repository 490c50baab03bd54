use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod auth;
pub mod feed;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Print the Strava authorization URL for the configured app
    Auth {},
    /// Print the activity calendar to stdout
    Feed {
        /// Comma separated sport types to include
        #[arg(long)]
        sport: Option<String>,
        /// Days of history to include (1-365)
        #[arg(long)]
        since_days: Option<String>,
        /// Maximum number of events (1-600)
        #[arg(long)]
        max: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Auth {}) => {
            auth::run()?;
        }
        Some(Command::Feed {
            sport,
            since_days,
            max,
        }) => {
            feed::run(sport, since_days, max).await?;
        }
        None => {}
    }

    Ok(())
}
