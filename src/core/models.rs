//! Core data models for local log analysis.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::parsing::parse_date_key;

/// Date string (`"3/14/24"`) to number of timestamps seen on that date.
///
/// Keys iterate in lexicographic order; use [`LogAnalysis::timeline`] for
/// chronological order.
pub type TimestampCounts = BTreeMap<String, usize>;

/// The bucket a log entry was classified into.
///
/// Classification is first-match-wins in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryKind {
    /// Entry mentions `http`
    Link,
    /// Entry contains a double quote
    Quote,
    /// Entry carries a reading-list marker
    ReadingList,
    /// Anything else
    PersonalNote,
}

impl EntryKind {
    /// Returns all kinds in precedence order.
    pub fn all() -> &'static [EntryKind] {
        &[
            EntryKind::Link,
            EntryKind::Quote,
            EntryKind::ReadingList,
            EntryKind::PersonalNote,
        ]
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Link => write!(f, "Links"),
            EntryKind::Quote => write!(f, "Quotes"),
            EntryKind::ReadingList => write!(f, "Reading List"),
            EntryKind::PersonalNote => write!(f, "Notes"),
        }
    }
}

/// One blank-line-delimited block of a chat log, after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEntry<'a> {
    /// Raw entry text, untrimmed
    pub text: &'a str,
    /// Bucket the entry landed in
    pub kind: EntryKind,
    /// First bracketed timestamp in the entry, if any
    pub timestamp: Option<&'a str>,
}

/// Entities extracted from a chat log, one list per bucket plus the raw
/// timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categories {
    pub links: Vec<String>,
    pub quotes: Vec<String>,
    pub personal_notes: Vec<String>,
    pub reading_lists: Vec<String>,
    pub timestamps: Vec<String>,
}

impl Categories {
    /// Creates empty categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the list for a given kind.
    pub fn items(&self, kind: EntryKind) -> &[String] {
        match kind {
            EntryKind::Link => &self.links,
            EntryKind::Quote => &self.quotes,
            EntryKind::ReadingList => &self.reading_lists,
            EntryKind::PersonalNote => &self.personal_notes,
        }
    }

    /// Returns `true` if nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
            && self.quotes.is_empty()
            && self.personal_notes.is_empty()
            && self.reading_lists.is_empty()
            && self.timestamps.is_empty()
    }
}

/// Result of a local analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogAnalysis {
    pub categories: Categories,
    pub timestamp_counts: TimestampCounts,
}

impl LogAnalysis {
    /// Total number of counted timestamps.
    pub fn total_timestamps(&self) -> usize {
        self.timestamp_counts.values().sum()
    }

    /// Re-keys the timestamp counts by calendar date.
    pub fn timeline(&self) -> Timeline {
        Timeline::from_counts(&self.timestamp_counts)
    }
}

/// Timestamp counts in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    /// Parsed dates with their counts, oldest first
    pub days: BTreeMap<NaiveDate, usize>,
    /// Keys that are not valid calendar dates (e.g. `13/40/24`)
    pub unparsed: BTreeMap<String, usize>,
}

impl Timeline {
    /// Builds a timeline from raw date-string counts.
    ///
    /// `3/4/24` and `03/04/2024` land on the same day and are summed.
    pub fn from_counts(counts: &TimestampCounts) -> Self {
        let mut timeline = Timeline::default();
        for (key, &count) in counts {
            match parse_date_key(key) {
                Some(date) => *timeline.days.entry(date).or_default() += count,
                None => *timeline.unparsed.entry(key.clone()).or_default() += count,
            }
        }
        timeline
    }

    /// The day with the most timestamps. Earliest day wins ties.
    pub fn busiest_day(&self) -> Option<(NaiveDate, usize)> {
        self.days
            .iter()
            .fold(None, |best, (&date, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((date, count)),
            })
    }

    /// First and last day seen.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = *self.days.keys().next()?;
        let last = *self.days.keys().next_back()?;
        Some((first, last))
    }

    /// Returns `true` if there are no counts at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.unparsed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> TimestampCounts {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_categories_serde_field_names() {
        let categories = Categories {
            personal_notes: vec!["note".into()],
            reading_lists: vec!["Dune".into()],
            ..Categories::default()
        };
        let json = serde_json::to_string(&categories).unwrap();
        assert!(json.contains(r#""personalNotes":["note"]"#));
        assert!(json.contains(r#""readingLists":["Dune"]"#));
    }

    #[test]
    fn test_log_analysis_serde_field_names() {
        let analysis = LogAnalysis {
            categories: Categories::default(),
            timestamp_counts: counts(&[("3/14/24", 2)]),
        };
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains(r#""timestampCounts":{"3/14/24":2}"#));
    }

    #[test]
    fn test_items_by_kind() {
        let categories = Categories {
            links: vec!["http://a".into()],
            quotes: vec!["q".into()],
            ..Categories::default()
        };
        assert_eq!(categories.items(EntryKind::Link), ["http://a"]);
        assert_eq!(categories.items(EntryKind::Quote), ["q"]);
        assert!(categories.items(EntryKind::PersonalNote).is_empty());
        assert!(!categories.is_empty());
        assert!(Categories::new().is_empty());
    }

    #[test]
    fn test_timeline_orders_chronologically() {
        // Lexicographic order would put 10/1/24 before 9/30/24
        let timeline = Timeline::from_counts(&counts(&[("10/1/24", 1), ("9/30/24", 3)]));
        let days: Vec<_> = timeline.days.keys().map(|d| d.to_string()).collect();
        assert_eq!(days, vec!["2024-09-30", "2024-10-01"]);
    }

    #[test]
    fn test_timeline_merges_equivalent_keys() {
        let timeline = Timeline::from_counts(&counts(&[("3/4/24", 1), ("03/04/2024", 2)]));
        assert_eq!(timeline.days.len(), 1);
        assert_eq!(timeline.days.values().sum::<usize>(), 3);
    }

    #[test]
    fn test_timeline_keeps_unparsed_keys() {
        let timeline = Timeline::from_counts(&counts(&[("13/40/24", 2), ("1/2/24", 1)]));
        assert_eq!(timeline.unparsed.get("13/40/24"), Some(&2));
        assert_eq!(timeline.days.len(), 1);
    }

    #[test]
    fn test_busiest_day_prefers_earliest_on_tie() {
        let timeline = Timeline::from_counts(&counts(&[("1/3/24", 2), ("1/2/24", 2), ("1/1/24", 1)]));
        let (day, count) = timeline.busiest_day().unwrap();
        assert_eq!(day.to_string(), "2024-01-02");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_span_and_empty() {
        let timeline = Timeline::from_counts(&counts(&[("1/3/24", 1), ("2/1/24", 1)]));
        let (first, last) = timeline.span().unwrap();
        assert_eq!(first.to_string(), "2024-01-03");
        assert_eq!(last.to_string(), "2024-02-01");

        let empty = Timeline::default();
        assert!(empty.is_empty());
        assert!(empty.span().is_none());
        assert!(empty.busiest_day().is_none());
    }
}
