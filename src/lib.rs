//! # Chatlens
//!
//! A Rust library for making sense of plain-text chat logs exported from a
//! browser chat, the kind where people paste links, quotes, reading lists
//! and notes to themselves.
//!
//! ## Overview
//!
//! Chatlens offers two independent analyses of the same log:
//! - **Local** - regex-based, synchronous and pure. Splits the log into
//!   blank-line-delimited entries and sorts each into exactly one of links,
//!   quotes, reading lists or personal notes, while tallying bracketed
//!   timestamps per date.
//! - **AI** - sends the whole log to an OpenAI-compatible chat-completion
//!   endpoint with a strict JSON schema and returns typed [`ContentData`]
//!   (categories with confidence scores, themes, patterns, relationships
//!   and insights).
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let log = "[3/14/24, 9:00:00 AM] Check out http://example.com\n\n\
//!            Reading list:\n- Book A\n- Book B";
//!
//! let analysis = analyze_local(log).unwrap();
//! assert_eq!(analysis.categories.links, ["http://example.com"]);
//! assert_eq!(analysis.categories.reading_lists, ["Book A", "Book B"]);
//! assert_eq!(analysis.timestamp_counts["3/14/24"], 1);
//! ```
//!
//! ## AI Analysis
//!
//! ```rust,no_run
//! # #[cfg(feature = "ai")]
//! # async fn example() -> chatlens::Result<()> {
//! use chatlens::ai::{OpenAiAnalyzer, analyze_with_ai};
//! use chatlens::config::AiConfig;
//!
//! let analyzer = OpenAiAnalyzer::new(AiConfig::new("sk-...").with_model("gpt-4o-mini"))?;
//! if let Some(data) = analyze_with_ai(&analyzer, "Reading list:\n- Dune").await {
//!     println!("{}", data.theme_detection.dominant_theme);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`core`] - Local analysis and reporting
//!   - [`core::analyzer`] - [`LocalAnalyzer`], [`analyze_local`]
//!   - [`core::models`] - [`Categories`], [`LogAnalysis`], [`Timeline`]
//!   - [`core::views`] - link labels, note timestamps, score helpers
//!   - [`core::output`] - text, JSON and CSV writers
//! - [`parsing`] - Entry patterns (timestamps, URLs, quotes, reading lists)
//! - [`ai`] - [`ContentData`], the response schema and the HTTP analyzer
//! - [`input`] - [`RawLog`], upload validation and the upload cache
//! - [`config`] - [`AnalyzerConfig`], [`AiConfig`]
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`cli`] - CLI types ([`Mode`](cli::Mode), [`OutputFormat`](cli::OutputFormat))
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports
//!
//! ## Features
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `ai` | HTTP analyzer (`reqwest`, `tokio`, `async-trait`) |
//! | `csv-output` | CSV writer |
//! | `json-output` | JSON writer |
//! | `cli` | The `chatlens` binary |
//! | `full` | All of the above (default) |

pub mod ai;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod input;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use ai::ContentData;
pub use config::{AiConfig, AnalyzerConfig};
pub use core::{Categories, LocalAnalyzer, LogAnalysis, Report, Timeline, analyze_local};
pub use error::{ChatlensError, Result};
pub use input::RawLog;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Configuration
    pub use crate::config::{AiConfig, AnalyzerConfig};

    // Input
    pub use crate::input::{RawLog, UploadCache};

    // Local analysis
    pub use crate::core::analyzer::{LocalAnalyzer, analyze_local, count_timestamps};
    pub use crate::core::models::{
        Categories, EntryKind, LogAnalysis, Timeline, TimestampCounts,
    };

    // Reporting
    pub use crate::core::Report;
    pub use crate::core::output::{to_text, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    // AI analysis
    pub use crate::ai::ContentData;
    #[cfg(feature = "ai")]
    pub use crate::ai::{ContentAnalyzer, OpenAiAnalyzer, analyze_with_ai};
}
