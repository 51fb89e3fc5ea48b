//! Upload batch processing.
//!
//! Each uploaded file is dispatched by filename suffix: `.txt`/`.json`
//! files are decoded as UTF-8 and run through the export parser, anything
//! else is written to the media store verbatim. The batch is processed in
//! arrival order and the aggregated outcome is returned as one response.
//!
//! Failure anywhere aborts the whole batch: an invalid-UTF-8 export or a
//! failed disk write surfaces as an error with no rollback of media files
//! already written.

use serde::Serialize;

use crate::error::{ChatlensError, Result};
use crate::message::ChatMessage;
use crate::parser::parse_export;
use crate::store::MediaStore;

/// Filename suffixes treated as text exports. The check is case-sensitive,
/// so `CHAT.TXT` is stored as media.
const TEXT_SUFFIXES: [&str; 2] = [".txt", ".json"];

/// Aggregated result of one upload batch, serialized as the `/upload/`
/// response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UploadOutcome {
    /// Regular messages from all text exports, in file then line order.
    pub messages: Vec<ChatMessage>,
    /// Media-placeholder messages, same ordering.
    pub media_messages: Vec<ChatMessage>,
    /// Original filenames of files persisted to the media store.
    pub uploaded_files: Vec<String>,
}

/// Returns `true` if the filename routes to the export parser.
fn is_text_export(filename: &str) -> bool {
    TEXT_SUFFIXES.iter().any(|suffix| filename.ends_with(*suffix))
}

/// Processes an ordered batch of `(filename, bytes)` payloads.
pub fn process_batch<I, B>(files: I, media: &MediaStore) -> Result<UploadOutcome>
where
    I: IntoIterator<Item = (String, B)>,
    B: Into<Vec<u8>>,
{
    let mut outcome = UploadOutcome::default();

    for (filename, bytes) in files {
        let bytes = bytes.into();
        if is_text_export(&filename) {
            let text = String::from_utf8(bytes).map_err(|source| ChatlensError::Utf8 {
                context: filename.clone(),
                source,
            })?;
            let parsed = parse_export(&text);
            tracing::info!(
                filename,
                messages = parsed.messages.len(),
                media_messages = parsed.media_messages.len(),
                "parsed chat export"
            );
            outcome.messages.extend(parsed.messages);
            outcome.media_messages.extend(parsed.media_messages);
        } else {
            media.store(&filename, &bytes)?;
            outcome.uploaded_files.push(filename);
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn media_store() -> (TempDir, MediaStore) {
        let dir = TempDir::new().unwrap();
        let store = MediaStore::new(dir.path().join("uploads")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_suffix_routing() {
        assert!(is_text_export("chat.txt"));
        assert!(is_text_export("export.json"));
        assert!(!is_text_export("photo.jpg"));
        // Case-sensitive on purpose.
        assert!(!is_text_export("CHAT.TXT"));
        assert!(!is_text_export("chat.txt.bak"));
    }

    #[test]
    fn test_mixed_batch() {
        let (_dir, store) = media_store();
        let export = "01/01/2024, 10:00 - Bob: Hi there\n\
                      01/01/2024, 10:01 - Bob: <Media omitted>\n\
                      not a valid line";
        let files = vec![
            ("chat.txt".to_string(), export.as_bytes().to_vec()),
            ("photo.jpg".to_string(), vec![0xff, 0xd8, 0xff]),
        ];

        let outcome = process_batch(files, &store).unwrap();

        assert_eq!(outcome.messages.len(), 1);
        assert_eq!(outcome.messages[0].sender, "Bob");
        assert_eq!(outcome.messages[0].message, "Hi there");
        assert_eq!(
            outcome.messages[0].timestamp.as_deref(),
            Some("01/01/2024, 10:00 - ")
        );
        assert_eq!(outcome.media_messages.len(), 1);
        assert_eq!(outcome.media_messages[0].message, "Media File");
        assert_eq!(outcome.uploaded_files, ["photo.jpg"]);
        assert!(store.path_of("photo.jpg").is_some());
    }

    #[test]
    fn test_records_follow_file_order() {
        let (_dir, store) = media_store();
        let files = vec![
            ("a.txt".to_string(), b"Alice: one".to_vec()),
            ("b.txt".to_string(), b"Bob: two".to_vec()),
        ];

        let outcome = process_batch(files, &store).unwrap();
        let senders: Vec<&str> = outcome.messages.iter().map(|m| m.sender.as_str()).collect();
        assert_eq!(senders, ["Alice", "Bob"]);
    }

    #[test]
    fn test_invalid_utf8_fails_whole_batch() {
        let (_dir, store) = media_store();
        let files = vec![
            ("photo.jpg".to_string(), vec![1, 2, 3]),
            ("bad.txt".to_string(), vec![0xff, 0xfe, 0xfd]),
        ];

        let err = process_batch(files, &store).unwrap_err();
        assert!(matches!(err, ChatlensError::Utf8 { .. }));
        // The earlier media file stays written: no rollback.
        assert!(store.path_of("photo.jpg").is_some());
    }

    #[test]
    fn test_empty_batch() {
        let (_dir, store) = media_store();
        let outcome = process_batch(Vec::<(String, Vec<u8>)>::new(), &store).unwrap();
        assert_eq!(outcome, UploadOutcome::default());
    }
}
