//! Grammar of the text between a placeholder's braces
//!
//! ```text
//! placeholder := '{' sigil? name (',' alignment)? (':' format)? '}'
//! sigil       := '@' | '$'
//! name        := (alnum | '_')+
//! alignment   := '-'? digit+        (non-zero)
//! format      := any char except '}'
//! ```

use super::token::{Alignment, Destructuring, PlaceholderToken};
use crate::diagnostics::DiagnosticKind;

/// The three sections of placeholder content, not yet validated
#[derive(Debug, PartialEq)]
struct Parts<'a> {
    name: &'a str,
    alignment: Option<&'a str>,
    format: Option<&'a str>,
}

/// The first `:` starts the format; a `,` only starts the alignment when it
/// comes before that colon.
fn split(content: &str) -> Parts<'_> {
    let format_at = content.find(':');
    let align_at = content
        .find(',')
        .filter(|&at| format_at.map_or(true, |f| at < f));
    let name_end = align_at.or(format_at).unwrap_or(content.len());
    let align_end = format_at.unwrap_or(content.len());

    Parts {
        name: &content[..name_end],
        alignment: align_at.map(|at| &content[at + 1..align_end]),
        format: format_at.map(|at| &content[at + 1..]),
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn parse_name(text: &str) -> Result<(Destructuring, &str), DiagnosticKind> {
    let mut chars = text.chars();
    let (destructuring, name) = match chars.next().and_then(Destructuring::from_sigil) {
        Some(hint) => (hint, chars.as_str()),
        None => (Destructuring::Default, text),
    };
    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(DiagnosticKind::InvalidPropertyName);
    }
    Ok((destructuring, name))
}

fn parse_alignment(text: &str) -> Result<Alignment, DiagnosticKind> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DiagnosticKind::InvalidAlignment);
    }
    text.parse::<i32>()
        .ok()
        .and_then(Alignment::from_signed)
        .ok_or(DiagnosticKind::InvalidAlignment)
}

/// Parse a complete `{...}` fragment starting at `start_index`.
///
/// On failure the caller keeps the fragment as literal text.
pub(crate) fn parse_placeholder(
    raw_text: &str,
    start_index: usize,
) -> Result<PlaceholderToken, DiagnosticKind> {
    let content = raw_text
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(raw_text);
    if content.is_empty() {
        return Err(DiagnosticKind::EmptyPlaceholder);
    }

    let parts = split(content);
    let (destructuring, name) = parse_name(parts.name)?;
    let alignment = parts.alignment.map(parse_alignment).transpose()?;
    let format = parts.format.filter(|f| !f.is_empty()).map(str::to_string);

    Ok(PlaceholderToken::from_parts(
        name.to_string(),
        raw_text.to_string(),
        alignment,
        format,
        destructuring,
        start_index,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::AlignmentDirection;

    #[test]
    fn test_split_name_only() {
        assert_eq!(
            split("Name"),
            Parts {
                name: "Name",
                alignment: None,
                format: None
            }
        );
    }

    #[test]
    fn test_split_alignment_and_format() {
        assert_eq!(
            split("Name,-5:0.00"),
            Parts {
                name: "Name",
                alignment: Some("-5"),
                format: Some("0.00")
            }
        );
    }

    #[test]
    fn test_comma_after_colon_belongs_to_format() {
        assert_eq!(
            split("Amount:#,##0"),
            Parts {
                name: "Amount",
                alignment: None,
                format: Some("#,##0")
            }
        );
    }

    #[test]
    fn test_parses_all_directives() {
        let token = parse_placeholder("{@User,-10:l}", 4).unwrap();
        assert_eq!(token.name(), "User");
        assert_eq!(token.destructuring(), Destructuring::Destructure);
        assert_eq!(
            token.alignment(),
            Some(Alignment::new(AlignmentDirection::Left, 10))
        );
        assert_eq!(token.format(), Some("l"));
        assert_eq!(token.raw_text(), "{@User,-10:l}");
        assert_eq!(token.start_index(), 4);
    }

    #[test]
    fn test_stringify_sigil() {
        let token = parse_placeholder("{$Value}", 0).unwrap();
        assert_eq!(token.name(), "Value");
        assert_eq!(token.destructuring(), Destructuring::Stringify);
    }

    #[test]
    fn test_empty_format_means_no_format() {
        let token = parse_placeholder("{A:}", 0).unwrap();
        assert_eq!(token.format(), None);
        assert_eq!(token.raw_text(), "{A:}");
    }

    #[test]
    fn test_rejects_invalid_names() {
        for raw in ["{@}", "{A B}", "{A-B}", "{@@A}", "{:x}", "{,5}"] {
            assert_eq!(
                parse_placeholder(raw, 0).unwrap_err(),
                DiagnosticKind::InvalidPropertyName,
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_rejects_invalid_alignment() {
        for raw in ["{A,}", "{A,:x}", "{A,0}", "{A,+5}", "{A,5-}", "{A,x}", "{A,99999999999}"] {
            assert_eq!(
                parse_placeholder(raw, 0).unwrap_err(),
                DiagnosticKind::InvalidAlignment,
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_rejects_empty_content() {
        assert_eq!(
            parse_placeholder("{}", 0).unwrap_err(),
            DiagnosticKind::EmptyPlaceholder
        );
    }

    #[test]
    fn test_unicode_names_are_allowed() {
        let token = parse_placeholder("{Größe}", 0).unwrap();
        assert_eq!(token.name(), "Größe");
    }
}
