//! Property-based tests for the export line parser.

use proptest::prelude::*;

use chatlens::parser::{classify_line, parse_export, ParsedLine};

/// Senders without colons, so the non-greedy capture splits at the real
/// separator.
fn arb_sender() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,14}"
}

/// Plain single-line bodies without the media marker.
fn arb_body() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .,!?]{0,40}"
}

/// A well-formed `DD/MM/YYYY, HH:MM - ` prefix.
fn arb_prefix() -> impl Strategy<Value = String> {
    (1u32..=28, 1u32..=12, 1900u32..=2099, 0u32..=23, 0u32..=59).prop_map(
        |(day, month, year, hour, minute)| {
            format!("{day:02}/{month:02}/{year:04}, {hour:02}:{minute:02} - ")
        },
    )
}

/// Arbitrary multi-line export content (printable ASCII lines).
fn arb_content() -> impl Strategy<Value = String> {
    prop::collection::vec("[ -~]{0,60}", 0..30).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Structured lines always yield a message record with exact captures.
    #[test]
    fn structured_line_parses(prefix in arb_prefix(), sender in arb_sender(), body in arb_body()) {
        let line = format!("{prefix}{sender}: {body}");
        let parsed = classify_line(&line);
        let ParsedLine::Message(msg) = parsed else {
            return Err(TestCaseError::fail("expected a message record"));
        };
        prop_assert_eq!(msg.sender, sender);
        prop_assert_eq!(msg.message, body);
        prop_assert_eq!(msg.timestamp, Some(prefix));
    }

    /// The same line without a prefix still parses, with no timestamp.
    #[test]
    fn prefix_less_line_parses(sender in arb_sender(), body in arb_body()) {
        let line = format!("{sender}: {body}");
        let ParsedLine::Message(msg) = classify_line(&line) else {
            return Err(TestCaseError::fail("expected a message record"));
        };
        prop_assert_eq!(msg.sender, sender);
        prop_assert!(msg.timestamp.is_none());
    }

    /// Any body containing the media marker is normalized to "Media File".
    #[test]
    fn media_marker_normalizes(
        prefix in arb_prefix(),
        sender in arb_sender(),
        before in arb_body(),
        after in arb_body(),
    ) {
        let line = format!("{prefix}{sender}: {before}<Media omitted>{after}");
        let ParsedLine::Media(msg) = classify_line(&line) else {
            return Err(TestCaseError::fail("expected a media record"));
        };
        prop_assert_eq!(msg.message, "Media File");
    }

    /// Lines with no colon at all never produce a record.
    #[test]
    fn colon_free_line_drops(line in "[ -9;-~]{0,60}") {
        prop_assert_eq!(classify_line(&line), ParsedLine::Unmatched);
    }

    /// Parsing is deterministic and idempotent over arbitrary content.
    #[test]
    fn parse_is_idempotent(content in arb_content()) {
        prop_assert_eq!(parse_export(&content), parse_export(&content));
    }

    /// Every record comes from a line, so counts never exceed line count.
    #[test]
    fn record_count_bounded_by_lines(content in arb_content()) {
        let parsed = parse_export(&content);
        prop_assert!(parsed.len() <= content.lines().count());
    }
}
