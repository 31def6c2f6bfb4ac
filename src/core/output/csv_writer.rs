//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::EntryKind;
use crate::core::report::Report;
use crate::core::views::{category_scores, link_label};
use crate::error::Result;

/// Writes the report to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Section`, `Value`, `Count`
/// - One row per extracted item (`Count` empty), per timestamp date,
///   per AI category (`Count` is the rounded percent), per pattern and
///   per theme
/// - Encoding: UTF-8
pub fn write_csv(report: &Report, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(report, file)
}

/// Converts the report to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(report: &Report) -> Result<String> {
    let mut buf = Vec::new();
    write_records(report, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_records(report: &Report, out: impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(["Section", "Value", "Count"])?;

    if let Some(local) = &report.local {
        for &kind in EntryKind::all() {
            let section = section_name(kind);
            for item in local.categories.items(kind) {
                writer.write_record([section, item.as_str(), ""])?;
            }
        }
        for item in &local.categories.links {
            writer.write_record(["link_label", link_label(item).as_str(), ""])?;
        }
        for (date, count) in &local.timestamp_counts {
            writer.write_record(["timestamp_count", date.as_str(), count.to_string().as_str()])?;
        }
    }

    if let Some(ai) = &report.ai {
        for (category, percent) in category_scores(ai) {
            writer.write_record(["category", category, percent.to_string().as_str()])?;
        }
        for theme in &ai.theme_detection.themes {
            let marker = if *theme == ai.theme_detection.dominant_theme { "dominant" } else { "" };
            writer.write_record(["theme", theme.as_str(), marker])?;
        }
        for (pattern, occurrences) in ai.pattern_occurrences() {
            writer.write_record(["pattern", pattern, occurrences.to_string().as_str()])?;
        }
        for insight in &ai.insights.organized_insights {
            writer.write_record(["insight", insight.as_str(), ""])?;
        }
        for rel in &ai.content_relationship_mapping.relationships {
            writer.write_record([
                "relationship",
                rel.content_id.as_str(),
                rel.relationship_type.as_str(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn section_name(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Link => "link",
        EntryKind::Quote => "quote",
        EntryKind::ReadingList => "reading_list",
        EntryKind::PersonalNote => "note",
    }
}
