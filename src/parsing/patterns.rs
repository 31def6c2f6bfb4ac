//! Pattern matching for chat log entries.
//!
//! Chat logs exported from messenger apps put a bracketed US-style
//! timestamp in front of each line:
//!
//! ```text
//! [3/14/24, 9:00:00 AM] you: Check out http://example.com
//! ```
//!
//! This module holds the regexes the local analyzer runs over each entry,
//! plus chrono helpers for turning the matched text into dates.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

/// `[M/D/YY, H:MM:SS AM]` or `[M/D/YYYY, H:MM:SS PM]`
///
/// Digits are ASCII only.
pub const TIMESTAMP_PATTERN: &str =
    r"\[[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}, [0-9]{1,2}:[0-9]{2}:[0-9]{2} [AP]M\]";

/// Bare `M/D/YY` date inside a timestamp.
pub const DATE_PATTERN: &str = r"[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}";

/// `http://` or `https://` up to the next whitespace.
pub const URL_PATTERN: &str = r"https?://[^\s]+";

/// Shortest double-quoted span on a single line. `\r`, U+2028 and U+2029
/// end a line too.
pub const QUOTE_PATTERN: &str = r#""([^\r\n\u{2028}\u{2029}]*?)""#;

const DATE_FORMATS: &[&str] = &["%m/%d/%y", "%m/%d/%Y"];

const TIMESTAMP_FORMATS: &[&str] = &["%m/%d/%y, %I:%M:%S %p", "%m/%d/%Y, %I:%M:%S %p"];

/// Compiled regexes used to dissect a single log entry.
#[derive(Debug, Clone)]
pub struct EntryPatterns {
    timestamp: Regex,
    date: Regex,
    url: Regex,
    quote: Regex,
}

impl EntryPatterns {
    /// Compiles all entry patterns.
    pub fn new() -> Self {
        Self {
            timestamp: Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"),
            date: Regex::new(DATE_PATTERN).expect("date pattern is valid"),
            url: Regex::new(URL_PATTERN).expect("url pattern is valid"),
            quote: Regex::new(QUOTE_PATTERN).expect("quote pattern is valid"),
        }
    }

    /// Returns the first bracketed timestamp in `entry`, brackets included.
    pub fn find_timestamp<'a>(&self, entry: &'a str) -> Option<&'a str> {
        self.timestamp.find(entry).map(|m| m.as_str())
    }

    /// Returns the first bare `M/D/YY` date in `text`.
    pub fn find_date<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.date.find(text).map(|m| m.as_str())
    }

    /// Returns every `http(s)://` URL in `entry`, in order.
    pub fn find_urls<'a>(&self, entry: &'a str) -> impl Iterator<Item = &'a str> {
        self.url.find_iter(entry).map(|m| m.as_str())
    }

    /// Returns the text inside the first pair of double quotes.
    pub fn first_quote<'a>(&self, entry: &'a str) -> Option<&'a str> {
        self.quote
            .captures(entry)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for EntryPatterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Yields the items of a dash-prefixed list, with the dash and
/// surrounding whitespace removed.
///
/// Only lines whose very first character is `-` count.
///
/// ```rust
/// use chatlens::parsing::reading_list_items;
///
/// let items: Vec<_> = reading_list_items("Reading list:\n- Dune\n-  Solaris \n * nope").collect();
/// assert_eq!(items, vec!["Dune", "Solaris"]);
/// ```
pub fn reading_list_items(entry: &str) -> impl Iterator<Item = &str> {
    entry
        .split('\n')
        .filter_map(|line| line.strip_prefix('-'))
        .map(str::trim)
}

/// Parses a `M/D/YY` or `M/D/YYYY` date key.
pub fn parse_date_key(date: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
}

/// Parses a bracketed timestamp such as `[3/14/24, 9:00:00 AM]`.
pub fn parse_bracketed_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    let inner = timestamp
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(timestamp);

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(inner, format).ok())
}
