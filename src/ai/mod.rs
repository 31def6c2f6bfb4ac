//! LLM-assisted content analysis.
//!
//! The raw log is sent to an OpenAI-compatible chat-completion endpoint
//! together with a strict JSON schema. The reply is parsed into
//! [`ContentData`] and validated before anything else sees it.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "ai")]
//! # async fn example() -> chatlens::Result<()> {
//! use chatlens::ai::{OpenAiAnalyzer, analyze_with_ai};
//!
//! let analyzer = OpenAiAnalyzer::from_env()?;
//! match analyze_with_ai(&analyzer, "Reading list:\n- Dune").await {
//!     Some(data) => println!("dominant theme: {}", data.theme_detection.dominant_theme),
//!     None => println!("no analysis available"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! The typed models and the schema are always available. The HTTP client
//! and the [`ContentAnalyzer`] trait require the `ai` feature.

pub mod models;
pub mod schema;

#[cfg(feature = "ai")]
mod client;

pub use models::{
    ContentData, ContentRelationship, ContentRelationshipMapping, FrequencyAnalysis,
    GroupedThemes, Insights, PatternDetail, PatternRecognition, SmartContentCategorization,
    ThemeCount, ThemeDetection, TopPattern,
};
pub use schema::{SCHEMA_NAME, response_format, response_schema};

#[cfg(feature = "ai")]
pub use client::OpenAiAnalyzer;

#[cfg(feature = "ai")]
use async_trait::async_trait;

#[cfg(feature = "ai")]
use crate::error::Result;

/// A service that turns raw chat log text into [`ContentData`].
#[cfg(feature = "ai")]
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    /// Human-readable name of the backing service.
    fn name(&self) -> &'static str;

    /// Runs one analysis. Errors are returned, never retried.
    async fn analyze(&self, text: &str) -> Result<ContentData>;
}

/// Runs an analysis and folds every failure into `None`.
///
/// Empty text short-circuits without contacting the service. Errors are
/// logged at `error` level.
#[cfg(feature = "ai")]
pub async fn analyze_with_ai<A>(analyzer: &A, text: &str) -> Option<ContentData>
where
    A: ContentAnalyzer + ?Sized,
{
    if text.is_empty() {
        return None;
    }

    match analyzer.analyze(text).await {
        Ok(data) => Some(data),
        Err(err) => {
            tracing::error!(analyzer = analyzer.name(), error = %err, "content analysis failed");
            None
        }
    }
}
