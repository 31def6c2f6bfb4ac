//! Core processing logic for chatlens.
//!
//! This module contains:
//! - [`analyzer`] - Regex-based local categorization
//! - [`models`] - Categories, timestamp counts and the timeline
//! - [`views`] - Display helpers (link labels, note timestamps, scores)
//! - [`report`] - The bundle handed to the writers
//! - [`output`] - Format writers (text, JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{Report, analyze_local};
//!
//! let analysis = analyze_local("[3/14/24, 9:00:00 AM] Check out http://example.com").unwrap();
//! assert_eq!(analysis.categories.links, ["http://example.com"]);
//! assert_eq!(analysis.timestamp_counts["3/14/24"], 1);
//!
//! let report = Report::new().with_local(Some(analysis));
//! assert!(!report.is_empty());
//! ```

pub mod analyzer;
pub mod models;
pub mod output;
pub mod report;
pub mod views;

pub use analyzer::{LocalAnalyzer, analyze_local, count_timestamps, split_entries};
pub use models::{Categories, ClassifiedEntry, EntryKind, LogAnalysis, Timeline, TimestampCounts};
pub use report::Report;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
pub use output::{to_text, write_text};
