use crate::prelude::{println, *};
use jcenter_core::feed::{parse_feed, ReleaseFeed};
use log::{debug, info};

pub mod list;

#[derive(Debug, clap::Parser)]
#[command(name = "center")]
#[command(about = "Jenkins core release operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Print the information of recent-released Jenkins which are newer than the installed one
    #[clap(name = "list")]
    List(list::ListOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        if let Some(url) = &global.jenkins_url {
            println!("Jenkins URL: {}", url);
            println!();
        }
    }

    match app.command {
        Commands::List(options) => list::run(options, global).await,
    }
}

/// Fetch and parse the release feed. A single request, no retries.
pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<ReleaseFeed> {
    debug!("Fetching release feed from {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::SourceUnavailable(format!("{url}: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::SourceUnavailable(format!("{url}: HTTP {}", response.status())).into());
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::SourceUnavailable(format!("{url}: {e}")))?;

    let feed = parse_feed(&body).map_err(|e| Error::SourceUnavailable(format!("{url}: {e}")))?;
    info!("Fetched {} releases from {url}", feed.items.len());

    Ok(feed)
}
