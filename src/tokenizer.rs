//! # Tokenizer/ Lexer
//!
//! Splits the text of a JSON document into a flat token stream, or reports
//! the first lexical error.
pub mod error;
pub mod lexer;
pub mod token;

// Re-exports
pub use error::{LexError, LexErrorKind};
pub use lexer::{tokenize, tokenize_with_clock};
pub use token::{Token, TokenKind};
