use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;
use thiserror::Error;

/// Byte offset at which the version starts in a feed title ("Jenkins X.Y.Z").
pub const TITLE_VERSION_OFFSET: usize = "Jenkins ".len();

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.[0-9]*\.[0-9]*").expect("version pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Format of the jenkins version '{0}' is not correct. The format should be sth like 2.235.2")]
    InvalidFormat(String),
}

/// Compare two dotted `MAJOR.MINOR.PATCH` versions.
///
/// Components are compared as raw strings, so `"9" > "10"`. Callers depend on
/// this ordering to match the release feed, it is not a numeric comparison.
///
/// Only the first three components are consulted and missing ones are empty.
/// The minor and patch steps only report `Greater` when both sides are
/// non-empty; an undecided comparison falls through to the next component and
/// finally resolves to `Less`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let a = components(a);
    let b = components(b);

    match a[0].cmp(b[0]) {
        Ordering::Equal => {}
        ordering => return ordering,
    }

    if !a[1].is_empty() && !b[1].is_empty() && a[1] > b[1] {
        return Ordering::Greater;
    } else if a[1] < b[1] {
        return Ordering::Less;
    }

    if !a[2].is_empty() && !b[2].is_empty() && a[2] > b[2] {
        return Ordering::Greater;
    }

    Ordering::Less
}

fn components(version: &str) -> [&str; 3] {
    let mut parts = version.split('.');
    [
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    ]
}

/// Check that a user supplied version looks like `2.235.2`.
///
/// Only the start of the string is anchored, trailing text is accepted.
pub fn validate_version_format(version: &str) -> Result<(), VersionError> {
    if VERSION_PATTERN.is_match(version) {
        Ok(())
    } else {
        Err(VersionError::InvalidFormat(version.to_string()))
    }
}

/// Extract the version from a feed title such as "Jenkins 2.301.0".
///
/// Returns `None` when the title is shorter than the fixed prefix.
pub fn extract_title_version(title: &str) -> Option<&str> {
    title.get(TITLE_VERSION_OFFSET..)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // compare_versions tests
    // ============================================================================

    #[test]
    fn test_compare_versions_equal() {
        assert_eq!(compare_versions("2.300.1", "2.300.1"), Ordering::Equal);
    }

    #[test]
    fn test_compare_versions_major() {
        assert_eq!(compare_versions("3.0.0", "2.999.9"), Ordering::Greater);
        assert_eq!(compare_versions("2.999.9", "3.0.0"), Ordering::Less);
    }

    #[test]
    fn test_compare_versions_minor() {
        assert_eq!(compare_versions("2.301.0", "2.300.1"), Ordering::Greater);
        assert_eq!(compare_versions("2.300.1", "2.301.0"), Ordering::Less);
    }

    #[test]
    fn test_compare_versions_patch() {
        assert_eq!(compare_versions("2.300.2", "2.300.1"), Ordering::Greater);
        assert_eq!(compare_versions("2.300.1", "2.300.2"), Ordering::Less);
    }

    #[test]
    fn test_compare_versions_is_lexicographic() {
        // Known defect kept for compatibility: "9" sorts after "10".
        assert_eq!(compare_versions("2.9.0", "2.10.0"), Ordering::Greater);
        assert_eq!(compare_versions("10.0.0", "9.0.0"), Ordering::Less);
    }

    #[test]
    fn test_compare_versions_missing_components() {
        assert_eq!(compare_versions("2", "2.1"), Ordering::Less);
        assert_eq!(compare_versions("2.1", "2.1.1"), Ordering::Less);
        assert_eq!(compare_versions("3", "2.1.1"), Ordering::Greater);
    }

    #[test]
    fn test_compare_versions_empty_minor_on_right_falls_through() {
        // The minor step cannot decide, the patch step sees an empty patch too.
        assert_eq!(compare_versions("2.5.1", "2"), Ordering::Less);
        assert_eq!(compare_versions("2.5.1", "2..0"), Ordering::Greater);
    }

    #[test]
    fn test_compare_versions_empty_patch_defaults_to_less() {
        assert_eq!(compare_versions("2.300.1", "2.300"), Ordering::Less);
        assert_eq!(compare_versions("2.300", "2.300.1"), Ordering::Less);
    }

    #[test]
    fn test_compare_versions_ignores_fourth_component() {
        assert_eq!(compare_versions("2.300.1.5", "2.300.1.4"), Ordering::Less);
        assert_eq!(compare_versions("2.300.2.0", "2.300.1.9"), Ordering::Greater);
    }

    #[test]
    fn test_compare_versions_non_numeric() {
        assert_eq!(compare_versions("2.x.0", "2.a.0"), Ordering::Greater);
        assert_eq!(compare_versions("", "1.0.0"), Ordering::Less);
    }

    // ============================================================================
    // validate_version_format tests
    // ============================================================================

    #[test]
    fn test_validate_version_format_valid() {
        assert!(validate_version_format("2.235.2").is_ok());
        assert!(validate_version_format("2.235.2-rc").is_ok());
        assert!(validate_version_format("..").is_ok());
    }

    #[test]
    fn test_validate_version_format_invalid() {
        assert_eq!(
            validate_version_format("2.235"),
            Err(VersionError::InvalidFormat("2.235".to_string()))
        );
        assert!(validate_version_format("v2.235.2").is_err());
        assert!(validate_version_format("").is_err());
    }

    #[test]
    fn test_validate_version_format_message() {
        let err = validate_version_format("latest").unwrap_err();
        assert!(err.to_string().contains("'latest'"));
        assert!(err.to_string().contains("2.235.2"));
    }

    // ============================================================================
    // extract_title_version tests
    // ============================================================================

    #[test]
    fn test_extract_title_version() {
        assert_eq!(extract_title_version("Jenkins 2.301.0"), Some("2.301.0"));
    }

    #[test]
    fn test_extract_title_version_prefix_only() {
        assert_eq!(extract_title_version("Jenkins "), Some(""));
    }

    #[test]
    fn test_extract_title_version_short_title() {
        assert_eq!(extract_title_version("Jenkins"), None);
        assert_eq!(extract_title_version(""), None);
    }

    #[test]
    fn test_extract_title_version_non_char_boundary() {
        assert_eq!(extract_title_version("Jenkinsé2.0"), None);
    }
}
