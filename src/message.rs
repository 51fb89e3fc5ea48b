//! Chat message records produced by the export parser.
//!
//! A [`ChatMessage`] is the wire-level record returned from `/upload/`:
//! a sender, a message body, and the raw timestamp prefix of the line it
//! came from (when present).
//!
//! # Examples
//!
//! ```
//! use chatlens::ChatMessage;
//!
//! let msg = ChatMessage::new("Alice", "hello");
//! assert_eq!(msg.sender, "Alice");
//! assert!(msg.timestamp.is_none());
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Literal placeholder WhatsApp writes into an export in place of an
/// attached file.
pub const MEDIA_OMITTED_MARKER: &str = "<Media omitted>";

/// Normalized body used for media-placeholder records in responses.
pub const MEDIA_FILE_BODY: &str = "Media File";

/// Timestamp layout of the export's line prefix, without the trailing
/// `" - "` separator.
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// One parsed line of a chat export.
///
/// The `timestamp` field keeps the raw prefix exactly as it appeared in the
/// export, trailing `" - "` included, so responses stay byte-identical to
/// the source line. Lines without a date-time prefix (continuation lines
/// that happen to look like `sender: body`) carry `None`, which serializes
/// as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name captured before the `": "` separator.
    pub sender: String,

    /// Message body; the fixed [`MEDIA_FILE_BODY`] for media placeholders.
    pub message: String,

    /// Raw `DD/MM/YYYY, HH:MM - ` prefix, or `None` when absent.
    pub timestamp: Option<String>,
}

impl ChatMessage {
    /// Creates a record with no timestamp prefix.
    pub fn new(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
            timestamp: None,
        }
    }

    /// Builder method to attach the raw timestamp prefix.
    #[must_use]
    pub fn with_timestamp(mut self, raw: impl Into<String>) -> Self {
        self.timestamp = Some(raw.into());
        self
    }

    /// Returns `true` if this record is a normalized media placeholder.
    pub fn is_media(&self) -> bool {
        self.message == MEDIA_FILE_BODY
    }

    /// Interprets the raw timestamp prefix as a UTC datetime.
    ///
    /// Exports carry no timezone, so the naive time is taken as UTC. Returns
    /// `None` when the record has no prefix or the prefix does not parse.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        let trimmed = raw.trim_end_matches(" - ").trim_end();
        NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}
