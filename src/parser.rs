//! WhatsApp TXT export line parser.
//!
//! An export carries one message per physical line in the fixed shape
//! `DD/MM/YYYY, HH:MM - Sender: Message`, with the date-time prefix
//! optional (continuation lines of multi-line messages lack it). Each line
//! is classified independently; multi-line bodies are not reassembled.
//!
//! Classification is deliberately explicit: [`classify_line`] returns a
//! [`ParsedLine`] so that the drop-on-mismatch policy is visible in the
//! type rather than implied by a missing list entry.
//!
//! Known quirk, preserved on purpose: the sender capture is non-greedy, so
//! a prefix-less line whose body contains `": "` splits at the first
//! occurrence. `note: remember this` parses as sender `note`, body
//! `remember this`.

use std::sync::OnceLock;

use regex::Regex;

use crate::message::{ChatMessage, MEDIA_FILE_BODY, MEDIA_OMITTED_MARKER};

/// Line grammar: optional `DD/MM/YYYY, HH:MM - ` prefix, non-greedy
/// sender, `": "`, rest of line.
const LINE_PATTERN: &str = r"^(\d{2}/\d{2}/\d{4}, \d{2}:\d{2} - )?(.*?): (.*)";

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The pattern is a compile-time constant; compilation cannot fail.
    RE.get_or_init(|| Regex::new(LINE_PATTERN).unwrap())
}

/// Classification of a single export line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// A regular chat message.
    Message(ChatMessage),
    /// A media placeholder; the body is normalized to `"Media File"`.
    Media(ChatMessage),
    /// The line does not fit the grammar and produces no record.
    Unmatched,
}

/// Both record sequences produced from one export file, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedExport {
    /// Regular messages.
    pub messages: Vec<ChatMessage>,
    /// Media-placeholder messages.
    pub media_messages: Vec<ChatMessage>,
}

impl ParsedExport {
    /// Total records across both sequences.
    pub fn len(&self) -> usize {
        self.messages.len() + self.media_messages.len()
    }

    /// Returns `true` if no line produced a record.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.media_messages.is_empty()
    }

    /// Appends another export's records, keeping arrival order.
    pub fn extend(&mut self, other: ParsedExport) {
        self.messages.extend(other.messages);
        self.media_messages.extend(other.media_messages);
    }
}

/// Classifies one line of an export.
///
/// A line that matches the grammar becomes a [`ParsedLine::Media`] record
/// when its body is non-empty and contains the literal `<Media omitted>`
/// marker, and a [`ParsedLine::Message`] otherwise. Anything else is
/// [`ParsedLine::Unmatched`].
pub fn classify_line(line: &str) -> ParsedLine {
    let Some(caps) = line_regex().captures(line) else {
        return ParsedLine::Unmatched;
    };

    let timestamp = caps.get(1).map(|m| m.as_str().to_string());
    let sender = caps.get(2).map_or("", |m| m.as_str());
    let body = caps.get(3).map_or("", |m| m.as_str());

    if !body.is_empty() && body.contains(MEDIA_OMITTED_MARKER) {
        let mut msg = ChatMessage::new(sender, MEDIA_FILE_BODY);
        msg.timestamp = timestamp;
        ParsedLine::Media(msg)
    } else {
        let mut msg = ChatMessage::new(sender, body);
        msg.timestamp = timestamp;
        ParsedLine::Message(msg)
    }
}

/// Parses the full text content of one export file.
///
/// Unmatched lines are dropped without error; record order follows line
/// order within each sequence. Parsing the same content twice yields
/// identical output.
pub fn parse_export(content: &str) -> ParsedExport {
    let mut parsed = ParsedExport::default();

    for line in content.lines() {
        match classify_line(line) {
            ParsedLine::Message(msg) => parsed.messages.push(msg),
            ParsedLine::Media(msg) => parsed.media_messages.push(msg),
            ParsedLine::Unmatched => {}
        }
    }

    parsed
}
