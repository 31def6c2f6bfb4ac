//! Output format types for the chatlens library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks, so they can be used from library code and tests alike.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::core::{Report, analyze_local};
//! use chatlens::format::{OutputFormat, to_format_string};
//!
//! let report = Report::new().with_local(analyze_local("\"A great quote\""));
//!
//! let csv = to_format_string(&report, OutputFormat::Csv)?;
//! assert!(csv.contains("quote;A great quote;"));
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("report.json")?;
//! assert_eq!(format, OutputFormat::Json);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Report;
use crate::error::ChatlensError;

/// Output format for analysis reports.
///
/// - [`Text`](OutputFormat::Text) - terminal dashboard (default)
/// - [`Json`](OutputFormat::Json) - full report with camelCase field names
/// - [`Csv`](OutputFormat::Csv) - flat `Section;Value;Count` rows
///
/// # Example
///
/// ```rust
/// use chatlens::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("csv").unwrap();
/// assert_eq!(format, OutputFormat::Csv);
/// assert_eq!(format.extension(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human-readable dashboard
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv]
    }

    /// Returns the MIME type for this format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Json.mime_type(), "application/json");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, ChatlensError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatlensError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, json, csv"),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(report: &Report, path: &str, format: OutputFormat) -> Result<(), ChatlensError> {
    match format {
        OutputFormat::Text => crate::core::output::write_text(report, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(report, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_missing(format)),
    }
}

/// Converts a report to a string in the specified format.
///
/// Used by the CLI when the report goes to stdout.
pub fn to_format_string(report: &Report, format: OutputFormat) -> Result<String, ChatlensError> {
    match format {
        OutputFormat::Text => crate::core::output::to_text(report),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(report),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(report),
        #[allow(unreachable_patterns)]
        _ => Err(feature_missing(format)),
    }
}

#[allow(dead_code)]
fn feature_missing(format: OutputFormat) -> ChatlensError {
    let feature = match format {
        OutputFormat::Text => "default",
        OutputFormat::Json => "json-output",
        OutputFormat::Csv => "csv-output",
    };
    ChatlensError::invalid_format(
        "output",
        format!("Output format {format:?} requires the '{feature}' feature to be enabled"),
    )
}
