//! Shared parsing utilities.
//!
//! Regexes and chrono helpers used by the local analyzer and by the
//! output views.

pub mod patterns;

// Re-export commonly used items
pub use patterns::{
    EntryPatterns, parse_bracketed_timestamp, parse_date_key, reading_list_items,
};
