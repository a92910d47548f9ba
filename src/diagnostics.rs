//! Diagnostics for template fragments that degraded to literal text
//!
//! Parsing never fails: a malformed placeholder is rendered as written.
//! These diagnostics let tooling point at such fragments anyway.

use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::parser::lexer::Span;
use crate::parser::parse_with_diagnostics;

/// Why a fragment was not recognised as a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnterminatedPlaceholder,
    EmptyPlaceholder,
    InvalidPropertyName,
    InvalidAlignment,
    StrayClosingBrace,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnterminatedPlaceholder => {
                write!(f, "placeholder is never closed")
            }
            DiagnosticKind::EmptyPlaceholder => write!(f, "placeholder has no property name"),
            DiagnosticKind::InvalidPropertyName => write!(
                f,
                "property names may only contain letters, digits and underscores"
            ),
            DiagnosticKind::InvalidAlignment => {
                write!(f, "alignment must be a non-zero whole number")
            }
            DiagnosticKind::StrayClosingBrace => {
                write!(f, "unmatched `}}`; write `}}}}` for a literal brace")
            }
        }
    }
}

/// A malformed fragment and where it sits in the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDiagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
}

impl TemplateDiagnostic {
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Format the diagnostic with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, filename, self.span.start)
            .with_message("fragment rendered as literal text")
            .with_label(
                Label::new((filename, self.span.clone()))
                    .with_message(self.kind.to_string())
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written.ok().and_then(|_| String::from_utf8(buf).ok()) {
            Some(report) => report,
            None => self.to_string(),
        }
    }
}

impl fmt::Display for TemplateDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}: {}", self.span.start, self.span.end, self.kind)
    }
}

/// Check a template for fragments that will render as literal text
pub fn check(template: &str) -> Vec<TemplateDiagnostic> {
    parse_with_diagnostics(template).1
}
