//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_text`] / [`to_text`] - terminal dashboard, always available
//! - [`write_json`] / [`to_json`] - pretty JSON with camelCase fields - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - `Section;Value;Count` rows - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{to_text, write_csv, write_json};
//! use chatlens::core::{Report, analyze_local};
//!
//! let report = Report::new().with_local(analyze_local("Reading list:\n- Dune"));
//!
//! write_csv(&report, "report.csv")?;
//! write_json(&report, "report.json")?;
//! println!("{}", to_text(&report)?);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};
