//! Tokenizer: lexemes to template tokens in a single pass
//!
//! Malformed fragments never fail the parse. They are folded into the
//! surrounding literal text and reported as diagnostics.

use log::debug;

use super::lexer::{lex, Lexeme, Span};
use super::placeholder::parse_placeholder;
use super::token::{LiteralToken, Token};
use crate::diagnostics::{DiagnosticKind, TemplateDiagnostic};

/// Accumulates adjacent literal pieces so they become a single token
#[derive(Default)]
struct LiteralRun {
    text: String,
    span: Option<Span>,
}

impl LiteralRun {
    fn push(&mut self, text: &str, span: Span) {
        self.text.push_str(text);
        match &mut self.span {
            Some(run) => run.end = span.end,
            None => self.span = Some(span),
        }
    }

    fn flush(&mut self, tokens: &mut Vec<Token>) {
        if let Some(span) = self.span.take() {
            let text = std::mem::take(&mut self.text);
            tokens.push(Token::Literal(LiteralToken::with_span(text, span)));
        }
    }
}

fn is_close(lexeme: Lexeme) -> bool {
    matches!(lexeme, Lexeme::Close | Lexeme::EscapedClose)
}

struct Tokenizer<'a> {
    template: &'a str,
    tokens: Vec<Token>,
    diagnostics: Vec<TemplateDiagnostic>,
    literal: LiteralRun,
}

impl<'a> Tokenizer<'a> {
    fn new(template: &'a str) -> Self {
        Self {
            template,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            literal: LiteralRun::default(),
        }
    }

    fn report(&mut self, kind: DiagnosticKind, span: Span) {
        debug!(
            "treating {:?} at {:?} as literal text: {}",
            &self.template[span.clone()],
            span,
            kind
        );
        self.diagnostics.push(TemplateDiagnostic::new(kind, span));
    }

    fn stray_close(&mut self, span: Span) {
        self.report(DiagnosticKind::StrayClosingBrace, span.clone());
        self.literal.push("}", span);
    }

    fn run(mut self) -> (Vec<Token>, Vec<TemplateDiagnostic>) {
        let lexemes: Vec<(Lexeme, Span)> = lex(self.template).collect();

        // Second brace of a `}}` whose first brace closed a placeholder
        let mut pending_close: Option<usize> = None;

        let mut i = 0;
        while i < lexemes.len() {
            let (lexeme, span) = (lexemes[i].0, lexemes[i].1.clone());

            if let Some(start) = pending_close.take() {
                match lexeme {
                    Lexeme::Close => {
                        self.literal.push("}", start..span.end);
                        i += 1;
                        continue;
                    }
                    Lexeme::EscapedClose => {
                        self.literal.push("}", start..span.start + 1);
                        pending_close = Some(span.start + 1);
                        i += 1;
                        continue;
                    }
                    _ => self.stray_close(start..start + 1),
                }
            }

            match lexeme {
                Lexeme::Text => {
                    let text = &self.template[span.clone()];
                    self.literal.push(text, span);
                }
                Lexeme::EscapedOpen => self.literal.push("{", span),
                Lexeme::EscapedClose => self.literal.push("}", span),
                Lexeme::Close => self.stray_close(span),
                Lexeme::Open => {
                    let (consumed, leftover) = self.placeholder(&lexemes[i..]);
                    pending_close = leftover;
                    i += consumed;
                    continue;
                }
            }
            i += 1;
        }

        if let Some(start) = pending_close {
            self.stray_close(start..start + 1);
        }

        self.literal.flush(&mut self.tokens);
        (self.tokens, self.diagnostics)
    }

    /// Handle the fragment starting at an opening brace.
    ///
    /// The fragment runs to the first closing brace; opening braces inside it
    /// belong to the fragment. Returns the number of lexemes consumed and,
    /// when the closing brace was the first half of `}}`, the offset of the
    /// unpaired second brace.
    fn placeholder(&mut self, rest: &[(Lexeme, Span)]) -> (usize, Option<usize>) {
        let open = rest[0].1.clone();
        let close = rest
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, (lexeme, _))| is_close(*lexeme));

        let Some((index, (close_lexeme, close_span))) = close else {
            let end = rest.last().map_or(open.end, |(_, span)| span.end);
            self.report(DiagnosticKind::UnterminatedPlaceholder, open.start..end);
            self.literal.push("{", open);
            return (1, None);
        };

        // `}}` closes the placeholder with its first brace only
        let end = close_span.start + 1;
        let template = self.template;
        let raw_text = &template[open.start..end];

        match parse_placeholder(raw_text, open.start) {
            Ok(token) => {
                self.literal.flush(&mut self.tokens);
                self.tokens.push(Token::Placeholder(token));
            }
            Err(kind) => {
                self.report(kind, open.start..end);
                self.literal.push(raw_text, open.start..end);
            }
        }

        let leftover = (*close_lexeme == Lexeme::EscapedClose).then_some(end);
        (index + 1, leftover)
    }
}

/// Parse a template into its token sequence
pub fn parse(template: &str) -> Vec<Token> {
    Tokenizer::new(template).run().0
}

/// Parse a template, also returning a diagnostic for every fragment that
/// was kept as literal text
pub fn parse_with_diagnostics(template: &str) -> (Vec<Token>, Vec<TemplateDiagnostic>) {
    Tokenizer::new(template).run()
}
