//! Parser turning message template strings into token sequences

pub mod lexer;
mod placeholder;
pub mod token;
mod tokenizer;

pub use token::*;
pub use tokenizer::{parse, parse_with_diagnostics};
