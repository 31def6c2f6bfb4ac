//! Display helpers shared by the output writers.
//!
//! These turn analysis results into the small pieces a dashboard shows:
//! short link labels, note timestamps, percentage scores and pattern
//! shares.

use std::borrow::Cow;

use serde::Serialize;

use crate::ai::ContentData;

/// Short label for a link card.
///
/// Takes the host without a leading `www.`, keeps its first label and
/// capitalizes it. Falls back to the URL itself when it has no host.
///
/// # Example
///
/// ```rust
/// use chatlens::core::views::link_label;
///
/// assert_eq!(link_label("https://www.github.com/rust-lang"), "Github");
/// assert_eq!(link_label("not a url"), "not a url");
/// ```
pub fn link_label(link: &str) -> String {
    let Some(host) = url::Url::parse(link)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned))
    else {
        return link.to_string();
    };

    let host = host.strip_prefix("www.").unwrap_or(&host);
    let name = host.split('.').next().unwrap_or(host);
    capitalize(name)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A personal note split into its timestamp and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView<'a> {
    /// Timestamp text without brackets (e.g. `3/14/24, 9:00:00 AM`)
    pub timestamp: Option<&'a str>,
    /// Message with the first `you: ` removed
    pub content: Cow<'a, str>,
}

impl<'a> NoteView<'a> {
    /// Splits a note at the first `"] "`.
    ///
    /// Notes without that separator keep their whole text as content.
    pub fn parse(note: &'a str) -> Self {
        match note.split_once("] ") {
            Some((stamp, rest)) => Self {
                timestamp: Some(stamp.strip_prefix('[').unwrap_or(stamp)),
                content: strip_speaker(rest),
            },
            None => Self {
                timestamp: None,
                content: Cow::Borrowed(note),
            },
        }
    }
}

fn strip_speaker(text: &str) -> Cow<'_, str> {
    if let Some(rest) = text.strip_prefix("you: ") {
        Cow::Borrowed(rest)
    } else if text.contains("you: ") {
        Cow::Owned(text.replacen("you: ", "", 1))
    } else {
        Cow::Borrowed(text)
    }
}

/// `(category, percent)` pairs with each score rounded to a whole percent.
pub fn category_scores(data: &ContentData) -> Vec<(&str, i64)> {
    data.scored_categories()
        .map(|(category, score)| (category, (score * 100.0).round() as i64))
        .collect()
}

/// One slice of the pattern distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternShare<'a> {
    pub pattern: &'a str,
    pub occurrences: u64,
    /// Share of all occurrences, 0.0 - 100.0
    pub percent: f64,
}

/// Patterns with their occurrence counts and share of the total.
///
/// All shares are zero when no pattern occurred at all.
pub fn pattern_distribution(data: &ContentData) -> Vec<PatternShare<'_>> {
    let total: u64 = data.pattern_occurrences().map(|(_, n)| n).sum();
    data.pattern_occurrences()
        .map(|(pattern, occurrences)| PatternShare {
            pattern,
            occurrences,
            percent: if total == 0 {
                0.0
            } else {
                occurrences as f64 * 100.0 / total as f64
            },
        })
        .collect()
}
