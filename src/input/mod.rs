//! Loading chat logs.
//!
//! - [`RawLog`] - the uploaded text, immutable for one analysis run
//! - [`detect_mime`] - plain-text check applied to every upload
//! - [`UploadCache`] - optional on-disk copy of the last upload
//!
//! # Example
//!
//! ```rust,no_run
//! use chatlens::input::RawLog;
//!
//! let log = RawLog::from_path("whatsapp_chat.txt")?;
//! println!("{} bytes from {}", log.len(), log.source().unwrap_or("-"));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

mod cache;

pub use cache::{CACHE_KEY, UploadCache};

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ChatlensError, Result};

/// MIME type accepted for uploads.
pub const TEXT_PLAIN: &str = "text/plain";

/// File extensions accepted as plain text (compared case-insensitively).
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "log"];

const BOM: char = '\u{FEFF}';

/// Full text of an uploaded chat log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLog {
    text: String,
    source: Option<String>,
}

impl RawLog {
    /// Wraps text that is already in memory.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    /// Attaches a display name (usually the file name).
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Reads a plain-text file.
    ///
    /// Rejects files that fail the [`detect_mime`] check with
    /// [`ChatlensError::InvalidInput`]. A leading byte-order mark is
    /// dropped.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;

        // Decoded once; the same checks back `detect_mime`
        let text = has_text_extension(path)
            .then(|| String::from_utf8(bytes).ok())
            .flatten()
            .filter(|text| is_plain_text(text));

        let Some(text) = text else {
            warn!(path = %path.display(), "rejected non-text upload");
            return Err(ChatlensError::invalid_input(format!(
                "please upload a valid text file ({} is not {TEXT_PLAIN})",
                path.display()
            )));
        };
        let text = strip_bom(text);

        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        debug!(path = %path.display(), bytes = text.len(), "loaded chat log");

        Ok(Self { text, source })
    }

    /// The log text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display name, if known.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consumes the log, returning the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl AsRef<str> for RawLog {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Sniffs the MIME type of an upload.
///
/// Returns `Some("text/plain")` when the extension is one of
/// [`TEXT_EXTENSIONS`] (or absent) and the content is valid UTF-8 without
/// NUL bytes. Anything else yields `None`.
pub fn detect_mime(path: &Path, bytes: &[u8]) -> Option<&'static str> {
    let plain = has_text_extension(path) && std::str::from_utf8(bytes).is_ok_and(is_plain_text);
    plain.then_some(TEXT_PLAIN)
}

fn has_text_extension(path: &Path) -> bool {
    match path.extension() {
        None => true,
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            TEXT_EXTENSIONS.contains(&ext.as_str())
        }
    }
}

fn is_plain_text(text: &str) -> bool {
    !text.contains('\0')
}

/// Drops a leading UTF-8 byte-order mark.
pub(crate) fn strip_bom(mut text: String) -> String {
    if text.starts_with(BOM) {
        text.replace_range(..BOM.len_utf8(), "");
    }
    text
}
