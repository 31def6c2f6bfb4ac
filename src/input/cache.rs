//! On-disk copy of the most recent upload.
//!
//! A single fixed key, no expiry, no size limit. Storing a new upload
//! overwrites the previous one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{RawLog, strip_bom};
use crate::error::Result;

/// File name the last upload is stored under.
pub const CACHE_KEY: &str = "chat-log.txt";

/// Cache holding the last uploaded chat log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCache {
    dir: PathBuf,
}

impl UploadCache {
    /// Uses `dir` as the cache directory. It is created on first store.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Uses the platform cache directory (`~/.cache/chatlens` on Linux).
    ///
    /// Returns `None` if the platform has no cache directory.
    pub fn default_location() -> Option<Self> {
        dirs::cache_dir().map(|dir| Self::new(dir.join("chatlens")))
    }

    /// Directory holding the cache.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the cached upload.
    pub fn path(&self) -> PathBuf {
        self.dir.join(CACHE_KEY)
    }

    /// Saves `log`, replacing any previous upload.
    pub fn store(&self, log: &RawLog) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(), log.text())?;
        debug!(path = %self.path().display(), bytes = log.len(), "cached upload");
        Ok(())
    }

    /// Loads the cached upload, or `None` if nothing has been stored.
    pub fn load(&self) -> Result<Option<RawLog>> {
        match fs::read_to_string(self.path()) {
            Ok(text) => Ok(Some(RawLog::new(strip_bom(text)).with_source(CACHE_KEY))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Removes the cached upload. Clearing an empty cache is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
