use serde::Deserialize;
use thiserror::Error;

use crate::changelog::ReleaseItem;

/// RSS feed of the LTS (stable) Jenkins releases
pub const LTS_FEED_URL: &str = "https://www.jenkins.io/changelog-stable/rss.xml";

/// RSS feed of the weekly Jenkins releases
pub const WEEKLY_FEED_URL: &str = "https://www.jenkins.io/changelog/rss.xml";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Failed to parse release feed: {0}")]
    Parse(String),
}

/// Channel title and releases of a changelog feed, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseFeed {
    pub title: String,
    pub items: Vec<ReleaseItem>,
}

#[derive(Debug, Deserialize)]
struct RssDocument {
    channel: RssChannel,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(default)]
    title: String,
    #[serde(rename = "item", default)]
    items: Vec<ReleaseItem>,
}

/// Parse an RSS 2.0 changelog document.
///
/// Item order is preserved. Elements other than the channel title and the
/// item title, description and publish date are ignored.
pub fn parse_feed(xml: &str) -> Result<ReleaseFeed, FeedError> {
    let document: RssDocument =
        quick_xml::de::from_str(xml).map_err(|e| FeedError::Parse(e.to_string()))?;

    Ok(ReleaseFeed {
        title: document.channel.title,
        items: document.channel.items,
    })
}
