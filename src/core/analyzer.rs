//! Local chat log analyzer.
//!
//! Splits a log into blank-line-delimited entries and sorts each entry
//! into exactly one bucket, first match wins:
//!
//! 1. contains `http` → every URL goes to `links`
//! 2. contains `"` → the first quoted span goes to `quotes`
//! 3. contains a reading-list marker → every `-` line goes to `readingLists`
//! 4. otherwise → the trimmed entry goes to `personalNotes`
//!
//! Independently, the first bracketed timestamp of each entry is recorded
//! and tallied per date.
//!
//! # Example
//!
//! ```rust
//! use chatlens::core::analyze_local;
//!
//! let log = "[3/14/24, 9:00:00 AM] Check out http://example.com\n\n\"A great quote\"";
//! let analysis = analyze_local(log).unwrap();
//!
//! assert_eq!(analysis.categories.links, vec!["http://example.com"]);
//! assert_eq!(analysis.categories.quotes, vec!["A great quote"]);
//! assert_eq!(analysis.timestamp_counts["3/14/24"], 1);
//!
//! // Empty input yields no result rather than an empty analysis
//! assert!(analyze_local("").is_none());
//! ```

use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::core::models::{Categories, ClassifiedEntry, EntryKind, LogAnalysis, TimestampCounts};
use crate::parsing::{EntryPatterns, reading_list_items};

/// Separator between log entries.
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// Splits a raw log into entries.
///
/// Runs of more than two newlines leave the extra newlines at the start
/// of the following entry; nothing is dropped.
pub fn split_entries(text: &str) -> impl Iterator<Item = &str> {
    text.split(ENTRY_SEPARATOR)
}

/// Pattern-matching analyzer for plain-text chat logs.
///
/// Construction compiles the regexes once; reuse the analyzer across runs.
#[derive(Debug, Clone)]
pub struct LocalAnalyzer {
    config: AnalyzerConfig,
    patterns: EntryPatterns,
}

impl LocalAnalyzer {
    /// Creates an analyzer with the default reading-list markers.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            patterns: EntryPatterns::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes a whole log.
    ///
    /// Returns `None` for empty input. Every other input produces an
    /// analysis; entries that match no rule become personal notes.
    pub fn analyze(&self, text: &str) -> Option<LogAnalysis> {
        if text.is_empty() {
            return None;
        }

        let mut categories = Categories::new();
        let mut entries = 0usize;

        for entry in split_entries(text) {
            entries += 1;
            self.collect_entry(entry, &mut categories);
        }

        let timestamp_counts = self.count_timestamps(&categories.timestamps);

        debug!(
            entries,
            links = categories.links.len(),
            quotes = categories.quotes.len(),
            notes = categories.personal_notes.len(),
            reading = categories.reading_lists.len(),
            timestamps = categories.timestamps.len(),
            "local analysis finished"
        );

        Some(LogAnalysis {
            categories,
            timestamp_counts,
        })
    }

    /// Classifies every entry without extracting anything.
    pub fn classify<'a>(&self, text: &'a str) -> Vec<ClassifiedEntry<'a>> {
        if text.is_empty() {
            return Vec::new();
        }

        split_entries(text)
            .map(|entry| ClassifiedEntry {
                text: entry,
                kind: self.classify_entry(entry),
                timestamp: self.patterns.find_timestamp(entry),
            })
            .collect()
    }

    /// Decides which bucket a single entry belongs to.
    pub fn classify_entry(&self, entry: &str) -> EntryKind {
        if entry.contains("http") {
            EntryKind::Link
        } else if entry.contains('"') {
            EntryKind::Quote
        } else if self.is_reading_list(entry) {
            EntryKind::ReadingList
        } else {
            EntryKind::PersonalNote
        }
    }

    /// Tallies timestamps per date.
    ///
    /// Strings without a `M/D/YY` date are skipped.
    pub fn count_timestamps(&self, timestamps: &[String]) -> TimestampCounts {
        let mut counts = TimestampCounts::new();
        for timestamp in timestamps {
            if let Some(date) = self.patterns.find_date(timestamp) {
                *counts.entry(date.to_string()).or_default() += 1;
            }
        }
        counts
    }

    fn is_reading_list(&self, entry: &str) -> bool {
        self.config
            .reading_list_markers
            .iter()
            .any(|marker| entry.contains(marker.as_str()))
    }

    fn collect_entry(&self, entry: &str, categories: &mut Categories) {
        if let Some(timestamp) = self.patterns.find_timestamp(entry) {
            categories.timestamps.push(timestamp.to_string());
        }

        match self.classify_entry(entry) {
            EntryKind::Link => {
                categories
                    .links
                    .extend(self.patterns.find_urls(entry).map(str::to_string));
            }
            EntryKind::Quote => {
                if let Some(quote) = self.patterns.first_quote(entry) {
                    categories.quotes.push(quote.to_string());
                }
            }
            EntryKind::ReadingList => {
                categories
                    .reading_lists
                    .extend(reading_list_items(entry).map(str::to_string));
            }
            EntryKind::PersonalNote => {
                categories.personal_notes.push(entry.trim().to_string());
            }
        }
    }
}

impl Default for LocalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyzes a log with the default analyzer.
///
/// Returns `None` for empty input.
pub fn analyze_local(text: &str) -> Option<LogAnalysis> {
    LocalAnalyzer::new().analyze(text)
}

/// Tallies timestamps per date with the default patterns.
pub fn count_timestamps(timestamps: &[String]) -> TimestampCounts {
    LocalAnalyzer::new().count_timestamps(timestamps)
}
