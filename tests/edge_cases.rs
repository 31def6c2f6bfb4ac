//! Edge case tests for chatlens
//!
//! These tests cover various edge cases and boundary conditions
//! that might not be covered by regular unit and integration tests.

use chatlens::core::views::{NoteView, link_label};
use chatlens::core::{EntryKind, LocalAnalyzer, analyze_local, count_timestamps};
use chatlens::parsing::parse_bracketed_timestamp;

// =========================================================================
// Input shape
// =========================================================================

#[test]
fn test_whitespace_only_log_is_one_empty_note() {
    let analysis = analyze_local("   ").unwrap();
    assert_eq!(analysis.categories.personal_notes, [""]);
    assert!(analysis.timestamp_counts.is_empty());
}

#[test]
fn test_only_separators() {
    // "\n\n\n\n" splits into three empty entries
    let analysis = analyze_local("\n\n\n\n").unwrap();
    assert_eq!(analysis.categories.personal_notes, ["", "", ""]);
}

#[test]
fn test_windows_line_endings_do_not_split() {
    let analysis = analyze_local("first\r\n\r\nsecond").unwrap();
    assert_eq!(analysis.categories.personal_notes.len(), 1);
}

#[test]
fn test_triple_newline_leaves_leading_newline_trimmed() {
    let analysis = analyze_local("one\n\n\ntwo").unwrap();
    assert_eq!(analysis.categories.personal_notes, ["one", "two"]);
}

// =========================================================================
// Classification precedence
// =========================================================================

#[test]
fn test_bare_http_is_link_without_urls() {
    let analysis = analyze_local("the word http alone").unwrap();
    assert!(analysis.categories.links.is_empty());
    assert!(analysis.categories.personal_notes.is_empty());
    assert_eq!(
        LocalAnalyzer::new().classify_entry("the word http alone"),
        EntryKind::Link
    );
}

#[test]
fn test_link_beats_quote_and_marker() {
    let entry = "Reading list:\n- \"Dune\" http://dune.example";
    let analysis = analyze_local(entry).unwrap();
    assert_eq!(analysis.categories.links, ["http://dune.example"]);
    assert!(analysis.categories.quotes.is_empty());
    assert!(analysis.categories.reading_lists.is_empty());
}

#[test]
fn test_quote_beats_marker() {
    let analysis = analyze_local("Reading list:\n- \"Dune\"").unwrap();
    assert_eq!(analysis.categories.quotes, ["Dune"]);
    assert!(analysis.categories.reading_lists.is_empty());
}

#[test]
fn test_unterminated_quote_extracts_nothing() {
    let analysis = analyze_local("she said \"never").unwrap();
    assert!(analysis.categories.quotes.is_empty());
    assert!(analysis.categories.personal_notes.is_empty());
}

#[test]
fn test_only_first_quote_is_kept() {
    let analysis = analyze_local("\"one\" and \"two\"").unwrap();
    assert_eq!(analysis.categories.quotes, ["one"]);
}

#[test]
fn test_quote_does_not_span_carriage_return() {
    let analysis = analyze_local("\"a\rb\" said nobody").unwrap();
    assert_eq!(analysis.categories.quotes.len(), 0);
    assert!(analysis.categories.personal_notes.is_empty());
}

#[test]
fn test_empty_quote() {
    let analysis = analyze_local("\"\"").unwrap();
    assert_eq!(analysis.categories.quotes, [""]);
}

#[test]
fn test_reading_list_without_items() {
    let analysis = analyze_local("Reading list:").unwrap();
    assert!(analysis.categories.reading_lists.is_empty());
    assert!(analysis.categories.personal_notes.is_empty());
}

#[test]
fn test_reading_list_marker_mid_line() {
    let analysis = analyze_local("my Reading list: is long\n- A\n  - indented").unwrap();
    assert_eq!(analysis.categories.reading_lists, ["A"]);
}

#[test]
fn test_marker_is_case_sensitive() {
    let analysis = analyze_local("reading list:\n- A").unwrap();
    assert!(analysis.categories.reading_lists.is_empty());
    assert_eq!(analysis.categories.personal_notes.len(), 1);
}

// =========================================================================
// Timestamps
// =========================================================================

#[test]
fn test_only_first_timestamp_per_entry() {
    let entry = "[1/1/24, 1:00:00 AM] a\n[1/2/24, 2:00:00 AM] b";
    let analysis = analyze_local(entry).unwrap();
    assert_eq!(analysis.categories.timestamps, ["[1/1/24, 1:00:00 AM]"]);
    assert_eq!(analysis.timestamp_counts.len(), 1);
}

#[test]
fn test_malformed_timestamps_are_ignored() {
    for entry in [
        "[3/14/24 9:00:00 AM] missing comma",
        "[3/14/24, 9:00 AM] missing seconds",
        "[3/14/24, 9:00:00] missing meridiem",
        "[3/14/24, 9:00:00 am] lower case",
    ] {
        let analysis = analyze_local(entry).unwrap();
        assert!(analysis.categories.timestamps.is_empty(), "{entry}");
    }
}

#[test]
fn test_impossible_date_still_counted() {
    let analysis = analyze_local("[13/45/24, 9:00:00 AM] odd").unwrap();
    assert_eq!(analysis.timestamp_counts.get("13/45/24"), Some(&1));

    let timeline = analysis.timeline();
    assert!(timeline.days.is_empty());
    assert_eq!(timeline.unparsed.get("13/45/24"), Some(&1));
}

#[test]
fn test_non_ascii_digit_stamps_are_not_recorded() {
    let analysis = analyze_local("[٣/١٤/٢٤, ٩:٠٠:٠٠ AM] hi").unwrap();
    assert!(analysis.categories.timestamps.is_empty());
    assert!(analysis.timestamp_counts.is_empty());
    assert_eq!(analysis.categories.personal_notes, ["[٣/١٤/٢٤, ٩:٠٠:٠٠ AM] hi"]);

    let counts = count_timestamps(&["[３/１４/２４, ９:００:００ AM]".to_string()]);
    assert!(counts.is_empty());
}

#[test]
fn test_count_timestamps_skips_dateless_strings() {
    let counts = count_timestamps(&["no date".to_string(), "[1/2/2024, 3:04:05 PM]".to_string()]);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get("1/2/2024"), Some(&1));
}

#[test]
fn test_parse_bracketed_timestamp() {
    let ts = parse_bracketed_timestamp("[3/14/24, 9:05:07 PM]").unwrap();
    assert_eq!(ts.to_string(), "2024-03-14 21:05:07");
    assert!(parse_bracketed_timestamp("[3/14/24]").is_none());
}

// =========================================================================
// Unicode and special characters
// =========================================================================

#[test]
fn test_unicode_entries() {
    let log = "Привет мир\n\n\"こんにちは\"\n\nReading list:\n- Война и мир\n\n🔥 https://例え.jp/パス";
    let analysis = analyze_local(log).unwrap();

    assert_eq!(analysis.categories.personal_notes, ["Привет мир"]);
    assert_eq!(analysis.categories.quotes, ["こんにちは"]);
    assert_eq!(analysis.categories.reading_lists, ["Война и мир"]);
    assert_eq!(analysis.categories.links, ["https://例え.jp/パス"]);
}

#[test]
fn test_link_label_edge_cases() {
    assert_eq!(link_label("https://www.example.co.uk/page"), "Example");
    assert_eq!(link_label("https://WWW.Example.com"), "Example");
    assert_eq!(link_label("mailto:someone@example.com"), "mailto:someone@example.com");
    assert_eq!(link_label(""), "");
}

#[test]
fn test_note_view_edge_cases() {
    let note = NoteView::parse("] leading separator");
    assert_eq!(note.timestamp, Some(""));
    assert_eq!(note.content, "leading separator");

    let note = NoteView::parse("");
    assert_eq!(note.timestamp, None);
    assert_eq!(note.content, "");
}
