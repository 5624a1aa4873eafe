use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

use crate::content::{normalize_description, DESCRIPTION_WIDTH};
use crate::version::{compare_versions, extract_title_version};

/// Default number of description lines shown per release
pub const DEFAULT_DESCRIPTION_LINES: usize = 10;

/// Number of leading characters of the publish date shown in the report
pub const PUB_DATE_LENGTH: usize = 17;

/// Message shown instead of a table when nothing newer is available
pub const UP_TO_DATE_MESSAGE: &str = "You already have the latest version of Jenkins installed!";

/// Release announcement from the changelog feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
}

/// Release newer than the installed version, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogEntry {
    /// 1-based position in the feed
    pub index: usize,
    pub title: String,
    pub description: String,
    pub pub_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogReport {
    pub entries: Vec<ChangelogEntry>,
    pub is_up_to_date: bool,
}

/// Shaping options for the description column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangelogOptions {
    pub max_description_lines: usize,
    pub description_width: usize,
}

impl Default for ChangelogOptions {
    fn default() -> Self {
        Self {
            max_description_lines: DEFAULT_DESCRIPTION_LINES,
            description_width: DESCRIPTION_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("the title is too short to contain a version")]
    ShortTitle,

    #[error("the publish date is shorter than 17 characters")]
    ShortPubDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangelogError {
    #[error("Malformed feed item #{index} ({title:?}): {reason}", title = .item.title)]
    MalformedItem {
        index: usize,
        item: ReleaseItem,
        reason: MalformedReason,
    },
}

impl ChangelogError {
    fn malformed(position: usize, item: &ReleaseItem, reason: MalformedReason) -> Self {
        Self::MalformedItem {
            index: position + 1,
            item: item.clone(),
            reason,
        }
    }
}

/// Select the releases that are newer than `installed`.
///
/// `items` must be ordered newest first. The walk stops at the first release
/// whose version is not newer than the installed one, everything before it is
/// reported. An empty feed, or a feed whose first release is already
/// installed, yields an up-to-date report with no entries.
///
/// A malformed item anywhere before the boundary fails the whole report.
pub fn filter_changelog(
    items: &[ReleaseItem],
    installed: &str,
    options: &ChangelogOptions,
) -> Result<ChangelogReport, ChangelogError> {
    let mut entries = Vec::new();

    for (position, item) in items.iter().enumerate() {
        let version = extract_title_version(&item.title).ok_or_else(|| {
            ChangelogError::malformed(position, item, MalformedReason::ShortTitle)
        })?;

        if compare_versions(installed, version) != Ordering::Less {
            break;
        }

        let pub_date = item.pub_date.get(..PUB_DATE_LENGTH).ok_or_else(|| {
            ChangelogError::malformed(position, item, MalformedReason::ShortPubDate)
        })?;

        entries.push(ChangelogEntry {
            index: position + 1,
            title: item.title.clone(),
            description: normalize_description(
                &item.description,
                options.description_width,
                options.max_description_lines,
            ),
            pub_date: pub_date.to_string(),
        });
    }

    Ok(ChangelogReport {
        is_up_to_date: entries.is_empty(),
        entries,
    })
}
