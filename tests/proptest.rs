//! Property-based tests for the tokenizer using proptest.

use std::collections::HashMap;

use message_templates::{parse, MessageTemplate, ScalarValue, Token};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Templates built from a small alphabet that is dense in braces and
/// placeholder syntax, so malformed shapes show up often.
fn template_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("{".to_string()),
            Just("}".to_string()),
            Just("{{".to_string()),
            Just("}}".to_string()),
            Just(",".to_string()),
            Just(":".to_string()),
            Just("-".to_string()),
            Just("@".to_string()),
            Just("$".to_string()),
            "[a-c0-9 é]{1,3}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

/// A template piece paired with the text it renders to.
fn piece(source: &str, rendered: &str) -> impl Strategy<Value = (String, String)> {
    Just((source.to_string(), rendered.to_string()))
}

/// Well-formed templates: escapes, placeholders with known values and
/// brace-free text, in any order.
fn balanced_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        prop_oneof![
            piece("{{", "{"),
            piece("}}", "}"),
            piece("{A}", "1"),
            piece("{B,3}", "  2"),
            piece("{C:l}", "c"),
            "[a-c ,:]{1,3}".prop_map(|text| (text.clone(), text)),
        ],
        0..16,
    )
}

fn known_properties() -> HashMap<String, ScalarValue> {
    HashMap::from([
        ("A".to_string(), ScalarValue::from(1)),
        ("B".to_string(), ScalarValue::from(2)),
        ("C".to_string(), ScalarValue::from("c")),
    ])
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Token spans are contiguous and cover the whole source.
    #[test]
    fn spans_cover_source(source in template_strategy()) {
        let tokens = parse(&source);
        let mut next = 0;
        for token in &tokens {
            prop_assert_eq!(token.span().start, next);
            prop_assert!(token.span().end > token.span().start);
            next = token.span().end;
        }
        prop_assert_eq!(next, source.len());
    }

    /// Literal tokens are never adjacent to one another.
    #[test]
    fn literals_are_merged(source in template_strategy()) {
        let tokens = parse(&source);
        for pair in tokens.windows(2) {
            let both_literal = matches!(pair, [Token::Literal(_), Token::Literal(_)]);
            prop_assert!(!both_literal);
        }
    }

    /// Placeholders report the exact source text they came from.
    #[test]
    fn placeholder_raw_text_matches_source(source in template_strategy()) {
        for token in parse(&source) {
            if let Token::Placeholder(p) = token {
                prop_assert_eq!(&source[p.span()], p.raw_text());
            }
        }
    }

    /// Parsing the same text twice yields equal tokens.
    #[test]
    fn parse_is_idempotent(source in template_strategy()) {
        prop_assert_eq!(parse(&source), parse(&source));
    }

    /// Text without braces is a single literal holding the text.
    #[test]
    fn brace_free_text_is_one_literal(source in "[^{}]{1,40}") {
        let tokens = parse(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].to_string(), source);
    }

    /// With no properties supplied, rendering writes each token's own text.
    #[test]
    fn empty_properties_render_token_text(source in template_strategy()) {
        let template = MessageTemplate::parse(source);
        let expected: String = template.tokens().iter().map(|t| t.to_string()).collect();
        let properties: HashMap<String, ScalarValue> = HashMap::new();
        let rendered = template.render_to_string(&properties, None).unwrap();
        prop_assert_eq!(rendered, expected);
    }

    /// Well-formed templates render as their pieces rendered one by one.
    #[test]
    fn balanced_templates_render_piecewise(pieces in balanced_strategy()) {
        let source: String = pieces.iter().map(|(s, _)| s.as_str()).collect();
        let expected: String = pieces.iter().map(|(_, r)| r.as_str()).collect();
        let rendered = MessageTemplate::parse(source)
            .render_to_string(&known_properties(), None)
            .unwrap();
        prop_assert_eq!(rendered, expected);
    }
}
