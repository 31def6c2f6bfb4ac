//! Bundle of everything one run produced.

use serde::{Deserialize, Serialize};

use super::models::LogAnalysis;
use crate::ai::ContentData;

/// Local and AI results for one chat log, ready to be written out.
///
/// Either part may be missing: the local analyzer yields nothing for an
/// empty log, and the AI path yields nothing when it is disabled or fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Display name of the analyzed log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Regex-based categorization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<LogAnalysis>,
    /// Structured analysis from the external service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai: Option<ContentData>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_local(mut self, local: Option<LogAnalysis>) -> Self {
        self.local = local;
        self
    }

    #[must_use]
    pub fn with_ai(mut self, ai: Option<ContentData>) -> Self {
        self.ai = ai;
        self
    }

    /// Returns `true` if neither analysis produced anything.
    pub fn is_empty(&self) -> bool {
        self.local.is_none() && self.ai.is_none()
    }
}
