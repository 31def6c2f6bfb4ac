//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Mode`] - Which analyses to run
//! - [`OutputFormat`] - Output format options
//!
//! # Using Mode and OutputFormat in Libraries
//!
//! ```rust
//! use chatlens::cli::{Mode, OutputFormat};
//!
//! let mode: Mode = "both".parse().unwrap();
//! assert!(mode.runs_local() && mode.runs_ai());
//!
//! let format: chatlens::format::OutputFormat = OutputFormat::Json.into();
//! println!("Format: {}", format); // "JSON"
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{BASE_URL_ENV, MODEL_ENV};

/// Sort a browser chat log into links, quotes, reading lists and notes,
/// optionally with an LLM-generated content analysis.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --format json -o report.json
    chatlens chat.txt --mode both --cache
    chatlens --from-cache --mode ai
    chatlens --clear-cache

The AI modes read OPENAI_API_KEY from the environment.")]
pub struct Args {
    /// Path to a plain-text chat log
    pub input: Option<PathBuf>,

    /// Which analyses to run
    #[arg(short, long, value_enum, default_value = "local")]
    pub mode: Mode,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Chat model for the AI modes
    #[arg(long, env = MODEL_ENV)]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, value_name = "URL", env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Request timeout for the AI modes, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Keep a copy of the input in the upload cache
    #[arg(long)]
    pub cache: bool,

    /// Analyze the cached upload instead of INPUT
    #[arg(long, conflicts_with = "input")]
    pub from_cache: bool,

    /// Delete the cached upload and exit
    #[arg(long)]
    pub clear_cache: bool,

    /// Upload cache directory (default: the platform cache dir)
    #[arg(long, value_name = "DIR", env = "CHATLENS_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Which analyses a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Regex categorization only (no network)
    #[default]
    Local,

    /// LLM analysis only
    Ai,

    /// Both, in one report
    Both,
}

impl Mode {
    pub fn runs_local(self) -> bool {
        matches!(self, Mode::Local | Mode::Both)
    }

    pub fn runs_ai(self) -> bool {
        matches!(self, Mode::Ai | Mode::Both)
    }

    /// Returns all supported mode names.
    pub fn all_names() -> &'static [&'static str] {
        &["local", "ai", "both"]
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Local => write!(f, "local"),
            Mode::Ai => write!(f, "AI"),
            Mode::Both => write!(f, "local + AI"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Mode::Local),
            "ai" => Ok(Mode::Ai),
            "both" => Ok(Mode::Both),
            _ => Err(format!(
                "Unknown mode: '{}'. Expected one of: {}",
                s,
                Mode::all_names().join(", ")
            )),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal dashboard (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Full report as JSON
    Json,

    /// Semicolon-delimited rows
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&crate::format::OutputFormat::from(*self), f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
