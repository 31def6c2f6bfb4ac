//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure in the library: rejected uploads, I/O, output writing, and the
//! LLM-assisted analysis path.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! The local analyzer never fails. The AI path returns these errors from
//! [`ContentAnalyzer::analyze`](crate::ai::ContentAnalyzer::analyze);
//! [`analyze_with_ai`](crate::ai::analyze_with_ai) logs them and yields
//! `None` instead.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::input::RawLog;
///
/// fn load() -> Result<RawLog> {
///     Ok(RawLog::new("Reading list:\n- Dune"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The cache directory cannot be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The uploaded input was rejected.
    ///
    /// Raised when no file was given (and nothing is cached), or when the
    /// file is not plain text.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// A required configuration value is missing.
    #[error("Missing configuration: {key} is not set")]
    MissingConfig {
        /// Name of the missing key (usually an environment variable)
        key: &'static str,
    },

    /// Transport-level HTTP failure talking to the analysis service.
    #[cfg(feature = "ai")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The analysis service answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the service
        body: String,
    },

    /// The analysis service returned no usable message content.
    #[error("Empty response from analysis service: {context}")]
    EmptyResponse {
        /// What was missing
        context: String,
    },

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The analysis result parsed but violates a structural invariant.
    #[error("Invalid {section} in analysis result: {message}")]
    Schema {
        /// Top-level section of the result (e.g. "smartContentCategorization")
        section: &'static str,
        /// Description of the violation
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Unknown or unavailable output format.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when file content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        ChatlensError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a missing configuration error.
    pub fn missing_config(key: &'static str) -> Self {
        ChatlensError::MissingConfig { key }
    }

    /// Creates an API status error.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        ChatlensError::Api {
            status,
            body: body.into(),
        }
    }

    /// Creates an empty response error.
    pub fn empty_response(context: impl Into<String>) -> Self {
        ChatlensError::EmptyResponse {
            context: context.into(),
        }
    }

    /// Creates a schema violation error.
    pub fn schema(section: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::Schema {
            section,
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the input was rejected.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ChatlensError::InvalidInput { .. })
    }

    /// Returns `true` if a configuration value is missing.
    pub fn is_missing_config(&self) -> bool {
        matches!(self, ChatlensError::MissingConfig { .. })
    }

    /// Returns `true` if this is a schema violation.
    pub fn is_schema(&self) -> bool {
        matches!(self, ChatlensError::Schema { .. })
    }

    /// Returns `true` if the error came from talking to the analysis service.
    pub fn is_service(&self) -> bool {
        match self {
            ChatlensError::Api { .. } | ChatlensError::EmptyResponse { .. } => true,
            #[cfg(feature = "ai")]
            ChatlensError::Http(_) => true,
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
