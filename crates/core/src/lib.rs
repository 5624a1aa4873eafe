//! Core library for jcenter
//!
//! This crate implements the **Functional Core** of the jcenter application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The jcenter project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`jcenter_core`** (this crate): Pure transformation functions with zero I/O
//! - **`jcenter`**: HTTP, terminal output and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`version`]: Dotted version comparison and validation
//! - [`content`]: Release-note markup stripping and fixed-width reflow
//! - [`changelog`]: Selection of the releases newer than the installed one
//! - [`feed`]: RSS document deserialization into release items
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use jcenter_core::changelog::{filter_changelog, ChangelogOptions, ReleaseItem};
//!
//! let items = vec![ReleaseItem {
//!     title: "Jenkins 2.301.0".to_string(),
//!     description: "<li>Fix a bug</li>".to_string(),
//!     pub_date: "Tue, 06 Jul 2021 00:00:00 +0000".to_string(),
//! }];
//!
//! let report = filter_changelog(&items, "2.300.1", &ChangelogOptions::default())?;
//!
//! assert!(!report.is_up_to_date);
//! assert_eq!(report.entries.len(), 1);
//! ```

pub mod changelog;
pub mod content;
pub mod feed;
pub mod version;
