//! Example: Using chatlens as a library
//!
//! This example demonstrates how to use chatlens in your own projects.
//!
//! Run with: cargo run --example library_usage

use chatlens::core::views::{NoteView, link_label};
use chatlens::prelude::*;

const LOG: &str = "[3/14/24, 9:00:00 AM] you: Check out https://www.github.com/rust-lang

[3/14/24, 9:05:00 AM] you: \"Simplicity is prerequisite for reliability\"

To read:
- Dune
- Solaris

[3/16/24, 7:45:00 PM] you: book the train tickets";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatlens Library Usage Examples ===\n");

    // Example 1: One-shot local analysis
    println!("1. Local analysis:");
    let analysis = analyze_local(LOG).ok_or("log is empty")?;

    for link in &analysis.categories.links {
        println!("   link  [{}] {}", link_label(link), link);
    }
    for quote in &analysis.categories.quotes {
        println!("   quote “{}”", quote);
    }
    for note in &analysis.categories.personal_notes {
        let view = NoteView::parse(note);
        println!("   note  {} ({})", view.content, view.timestamp.unwrap_or("undated"));
    }
    // "To read:" is not the default marker, so this entry stays a note
    println!("   reading list items: {}", analysis.categories.reading_lists.len());

    // Example 2: Custom reading-list markers
    println!("\n2. Custom reading-list marker:");
    let analyzer =
        LocalAnalyzer::with_config(AnalyzerConfig::new().with_reading_list_marker("To read:"));
    let custom = analyzer.analyze(LOG).ok_or("log is empty")?;
    println!("   reading list: {}", custom.categories.reading_lists.join(", "));

    // Example 3: Per-entry classification
    println!("\n3. Classifying entries:");
    for entry in analyzer.classify(LOG) {
        println!(
            "   {:<12} {}",
            entry.kind.to_string(),
            entry.timestamp.unwrap_or("-")
        );
    }

    // Example 4: Timestamp activity
    println!("\n4. Timestamp activity:");
    let timeline = custom.timeline();
    for (day, count) in &timeline.days {
        println!("   {day}: {count}");
    }
    if let Some((day, count)) = timeline.busiest_day() {
        println!("   busiest: {day} ({count})");
    }

    // Example 5: Writing a report
    println!("\n5. Writing a report:");
    let report = Report::new().with_source("demo").with_local(Some(custom));
    let json = to_format_string(&report, OutputFormat::Json)?;
    println!("   JSON is {} bytes", json.len());
    println!("{}", to_text(&report)?);

    // Example 6: AI analysis (needs OPENAI_API_KEY)
    println!("6. AI analysis:");
    match AiConfig::from_env() {
        Ok(config) => {
            let runtime = tokio::runtime::Runtime::new()?;
            let analyzer = OpenAiAnalyzer::new(config)?;
            match runtime.block_on(analyze_with_ai(&analyzer, LOG)) {
                Some(data) => println!("   dominant theme: {}", data.theme_detection.dominant_theme),
                None => println!("   analysis failed"),
            }
        }
        Err(e) => println!("   skipped: {e}"),
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
