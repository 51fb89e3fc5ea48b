//! Persistence for uploaded media and submitted feedback.
//!
//! - [`media`] - upload directory plus the in-memory filename lookup
//! - [`feedback`] - append-only feedback documents in an embedded sled tree

pub mod feedback;
pub mod media;

pub use feedback::{FeedbackEntry, FeedbackStore};
pub use media::MediaStore;
