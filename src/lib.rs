//! # Chatlens
//!
//! A small web service for exploring WhatsApp chat exports: upload the
//! exported `.txt` log together with its media files, browse and filter
//! messages by sender, search the uploaded media, and leave feedback.
//!
//! ## Overview
//!
//! The upload endpoint takes a batch of files. Text exports are run through
//! a line parser that turns each `DD/MM/YYYY, HH:MM - Sender: Message` line
//! into a [`ChatMessage`] record (media placeholders get their own
//! sequence); every other file is written to the upload directory and
//! served back at `/static/<filename>`. Filtering and search happen
//! client-side on the returned JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::parser::parse_export;
//!
//! let parsed = parse_export("01/01/2024, 10:00 - Alice: hello");
//! assert_eq!(parsed.messages[0].sender, "Alice");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - the export line grammar ([`parse_export`](parser::parse_export),
//!   [`ParsedLine`](parser::ParsedLine))
//! - [`message`] - the [`ChatMessage`] record type
//! - [`upload`] - batch dispatch ([`process_batch`](upload::process_batch),
//!   [`UploadOutcome`](upload::UploadOutcome))
//! - [`store`] - [`MediaStore`](store::MediaStore) and
//!   [`FeedbackStore`](store::FeedbackStore)
//! - [`server`] - axum router and handlers
//! - [`config`] - layered service configuration
//! - [`error`] - unified error type ([`ChatlensError`], [`Result`])

pub mod config;
pub mod error;
pub mod message;
pub mod parser;
pub mod server;
pub mod store;
pub mod upload;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::ChatMessage;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{ChatlensError, Result};
    pub use crate::message::{ChatMessage, MEDIA_FILE_BODY, MEDIA_OMITTED_MARKER};
    pub use crate::parser::{classify_line, parse_export, ParsedExport, ParsedLine};
    pub use crate::server::{build_state, create_router, AppState};
    pub use crate::store::{FeedbackEntry, FeedbackStore, MediaStore};
    pub use crate::upload::{process_batch, UploadOutcome};
}
