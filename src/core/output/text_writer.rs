//! Terminal dashboard writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::models::{EntryKind, LogAnalysis};
use crate::core::report::Report;
use crate::core::views::{NoteView, category_scores, link_label, pattern_distribution};
use crate::ai::ContentData;
use crate::error::Result;

const BAR_WIDTH: usize = 20;
const ACTIVITY_WIDTH: usize = 30;

/// Writes the dashboard to a file.
pub fn write_text(report: &Report, output_path: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    render(report, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Renders the dashboard to a string.
pub fn to_text(report: &Report) -> Result<String> {
    let mut buf = Vec::new();
    render(report, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn render(report: &Report, out: &mut impl Write) -> std::io::Result<()> {
    if let Some(source) = &report.source {
        writeln!(out, "📖 {source}")?;
    }

    if report.is_empty() {
        writeln!(out, "No analysis results.")?;
        return Ok(());
    }

    if let Some(local) = &report.local {
        render_local(local, out)?;
    }
    if let Some(ai) = &report.ai {
        render_ai(ai, out)?;
    }
    Ok(())
}

fn heading(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "━━━ {title} ━━━")
}

fn bar(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn render_local(local: &LogAnalysis, out: &mut impl Write) -> std::io::Result<()> {
    let categories = &local.categories;

    heading(out, "Content Categorization")?;
    for &kind in EntryKind::all() {
        let items = categories.items(kind);
        writeln!(out, "{kind} ({})", items.len())?;
        for item in items {
            match kind {
                EntryKind::Link => writeln!(out, "  • {:<12} {item}", link_label(item))?,
                EntryKind::Quote => writeln!(out, "  “{item}”")?,
                EntryKind::ReadingList => writeln!(out, "  • {item}")?,
                EntryKind::PersonalNote => {
                    let note = NoteView::parse(item);
                    match note.timestamp {
                        Some(stamp) => writeln!(out, "  [{stamp}] {}", note.content)?,
                        None => writeln!(out, "  {}", note.content)?,
                    }
                }
            }
        }
    }

    heading(out, "Timestamp Activity")?;
    let timeline = local.timeline();
    if timeline.is_empty() {
        writeln!(out, "  no timestamps")?;
        return Ok(());
    }

    let max = timeline
        .days
        .values()
        .chain(timeline.unparsed.values())
        .copied()
        .max()
        .unwrap_or(1)
        .max(1);
    for (day, &count) in &timeline.days {
        writeln!(out, "  {day}  {} {count}", bar(count * ACTIVITY_WIDTH / max, ACTIVITY_WIDTH))?;
    }
    for (key, &count) in &timeline.unparsed {
        writeln!(out, "  {key:<10}  {} {count}", bar(count * ACTIVITY_WIDTH / max, ACTIVITY_WIDTH))?;
    }

    writeln!(out, "  total: {}", local.total_timestamps())?;
    if let Some((day, count)) = timeline.busiest_day() {
        writeln!(out, "  busiest day: {day} ({count})")?;
    }
    if let Some((first, last)) = timeline.span() {
        if first != last {
            writeln!(out, "  span: {first} → {last}")?;
        }
    }
    Ok(())
}

fn render_ai(data: &ContentData, out: &mut impl Write) -> std::io::Result<()> {
    heading(out, "Category Confidence")?;
    let scores = category_scores(data);
    let width = scores.iter().map(|(c, _)| c.chars().count()).max().unwrap_or(0);
    for (category, percent) in scores {
        let filled = usize::try_from(percent.clamp(0, 100)).unwrap_or(0) * BAR_WIDTH / 100;
        writeln!(out, "  {category:<width$}  {} {percent}%", bar(filled, BAR_WIDTH))?;
    }

    heading(out, "Active Themes")?;
    let dominant = &data.theme_detection.dominant_theme;
    for theme in &data.theme_detection.themes {
        if theme == dominant {
            writeln!(out, "  ★ {theme} (dominant)")?;
        } else {
            writeln!(out, "  • {theme}")?;
        }
    }
    if !data.theme_detection.themes.contains(dominant) && !dominant.is_empty() {
        writeln!(out, "  ★ {dominant} (dominant)")?;
    }

    heading(out, "Pattern Distribution")?;
    for share in pattern_distribution(data) {
        writeln!(
            out,
            "  {:<24} {:>4}  {:>5.1}%",
            share.pattern, share.occurrences, share.percent
        )?;
    }

    heading(out, "Key Insights")?;
    for insight in &data.insights.organized_insights {
        writeln!(out, "  • {insight}")?;
    }
    let counts = &data.insights.grouped_themes.theme_counts;
    if !data.insights.grouped_themes.themes.is_empty() {
        writeln!(
            out,
            "  grouped: {} ({}: {})",
            data.insights.grouped_themes.themes.join(", "),
            counts.theme,
            counts.count
        )?;
    }

    heading(out, "Content Relationships")?;
    for rel in &data.content_relationship_mapping.relationships {
        writeln!(out, "  {} → {}", rel.content_id, rel.relationship_type)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::models::fixtures::SAMPLE_JSON;
    use crate::core::analyzer::analyze_local;

    const LOG: &str = "[3/14/24, 9:00:00 AM] Check out https://www.github.com/rust-lang\n\n\
                       \"Stay hungry\"\n\n\
                       Reading list:\n- Dune\n\n\
                       [3/15/24, 8:00:00 PM] you: call mom";

    #[test]
    fn test_to_text_local_sections() {
        let report = Report::new().with_source("chat.txt").with_local(analyze_local(LOG));
        let text = to_text(&report).unwrap();

        assert!(text.starts_with("📖 chat.txt"));
        assert!(text.contains("━━━ Content Categorization ━━━"));
        assert!(text.contains("Links (1)"));
        assert!(text.contains("Github"));
        assert!(text.contains("“Stay hungry”"));
        assert!(text.contains("  • Dune"));
        assert!(text.contains("[3/15/24, 8:00:00 PM] call mom"));
        assert!(text.contains("2024-03-14"));
        assert!(text.contains("total: 2"));
        assert!(!text.contains("Category Confidence"));
    }

    #[test]
    fn test_to_text_ai_sections() {
        let data = ContentData::from_json(SAMPLE_JSON).unwrap();
        let text = to_text(&Report::new().with_ai(Some(data))).unwrap();

        assert!(text.contains("━━━ Category Confidence ━━━"));
        assert!(text.contains("92%"));
        assert!(text.contains("★ Learning (dominant)"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("Most links are shared before noon"));
        assert!(text.contains("1 → references"));
        assert!(!text.contains("Content Categorization"));
    }

    #[test]
    fn test_to_text_empty_report() {
        assert_eq!(to_text(&Report::new()).unwrap(), "No analysis results.\n");
    }

    #[test]
    fn test_write_text() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_text(&Report::new().with_local(analyze_local("hello")), path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Notes (1)"));
        assert!(content.contains("no timestamps"));
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(3, 5), "███░░");
        assert_eq!(bar(9, 5), "█████");
    }
}
