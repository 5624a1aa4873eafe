use crate::prelude::{println, *};
use colored::Colorize;
use jcenter_core::changelog::{
    filter_changelog, ChangelogOptions, ChangelogReport, DEFAULT_DESCRIPTION_LINES,
    UP_TO_DATE_MESSAGE,
};
use jcenter_core::feed::{LTS_FEED_URL, WEEKLY_FEED_URL};
use jcenter_core::version::validate_version_format;
use log::info;
use prettytable::format::Alignment;
use prettytable::{Cell, Row};
use serde::Serialize;

use super::fetch_feed;
use crate::jenkins::{create_client, fetch_jenkins_version, JenkinsConfig};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Current Jenkins version (e.g. 2.345.1). Asked from the Jenkins instance when omitted
    #[arg(short = 'v', long = "version", env = "JENKINS_VERSION")]
    pub core_version: Option<String>,

    /// The amount of information to be printed in description column
    #[arg(long, env = "JCENTER_AMOUNT", default_value_t = DEFAULT_DESCRIPTION_LINES)]
    pub amount: usize,

    /// Use the weekly release feed instead of the LTS one
    #[arg(long)]
    pub weekly: bool,

    /// Read releases from a custom RSS feed
    #[arg(long, env = "JCENTER_FEED_URL", conflicts_with = "weekly")]
    pub feed_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListOptions {
    fn feed_url(&self) -> &str {
        match &self.feed_url {
            Some(url) => url,
            None if self.weekly => WEEKLY_FEED_URL,
            None => LTS_FEED_URL,
        }
    }
}

/// Result of the list command
#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub channel_title: String,
    pub installed_version: String,
    #[serde(flatten)]
    pub report: ChangelogReport,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let installed_version = resolve_installed_version(&options, &global).await?;

    if global.verbose {
        println!("Installed version: {}", installed_version.bright_white());
        println!("Release feed: {}", options.feed_url().cyan());
        println!();
    }

    let output = list_changelog_data(options.feed_url(), installed_version, options.amount).await?;

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output);
    }

    Ok(())
}

/// Use the version given on the command line, or ask the configured Jenkins for it
async fn resolve_installed_version(
    options: &ListOptions,
    global: &crate::Global,
) -> Result<String> {
    let version = match options.core_version.as_deref() {
        Some(version) if !version.is_empty() => version.to_string(),
        _ => {
            let config = JenkinsConfig::from_global(global)?;
            let client = create_client(&config)?;
            let version = fetch_jenkins_version(&client, &config).await?;
            info!("Jenkins at {} reports version {version}", config.base_url);
            version
        }
    };

    validate_version_format(&version)?;

    Ok(version)
}

/// Fetches the release feed and keeps the releases newer than `installed_version`
pub async fn list_changelog_data(
    feed_url: &str,
    installed_version: String,
    amount: usize,
) -> Result<ListOutput> {
    let client = reqwest::Client::new();
    let feed = fetch_feed(&client, feed_url).await?;

    let options = ChangelogOptions {
        max_description_lines: amount,
        ..ChangelogOptions::default()
    };
    let report = filter_changelog(&feed.items, &installed_version, &options)
        .context("Failed to build the changelog report")?;

    info!(
        "{} releases newer than {installed_version}",
        report.entries.len()
    );

    Ok(ListOutput {
        channel_title: feed.title,
        installed_version,
        report,
    })
}

/// Convert list output to JSON string
fn format_list_json(output: &ListOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Render the report as a table, or the up-to-date message when it is empty
fn format_list_text(output: &ListOutput) -> String {
    if output.report.is_up_to_date {
        return UP_TO_DATE_MESSAGE.to_string();
    }

    let mut table = new_table();
    table.add_row(Row::new(vec![Cell::new_align(
        &output.channel_title,
        Alignment::CENTER,
    )
    .with_hspan(4)]));
    table.add_row(prettytable::row!["Index", "Title", "Description", "PubDate"]);

    for entry in &output.report.entries {
        table.add_row(prettytable::row![
            entry.index,
            entry.title,
            entry.description,
            entry.pub_date
        ]);
    }

    table.to_string()
}

fn output_json(output: &ListOutput) -> Result<()> {
    let json = format_list_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &ListOutput) {
    let formatted = format_list_text(output);
    if output.report.is_up_to_date {
        println!("{}", formatted.green());
    } else {
        print!("{}", formatted);
    }
}
