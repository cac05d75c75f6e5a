//! # JSON Token
//!
//! Defines the tokens produced from lexing a JSON document, along with the
//! span of Unicode scalar values each one covers in the input.
use serde::Serialize;
use std::fmt::Display;

/// The closed set of token kinds a JSON document can be lexed into.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /* Delimiters */
    /// Opening curly brace `{`
    BraceOpen,

    /// Closing curly brace `}`
    BraceClose,

    /// Opening square bracket `[`
    BracketOpen,

    /// Closing square bracket `]`
    BracketClose,

    /// Colon character `:`
    Colon,

    /// Comma character `,`
    Comma,

    /* Values */
    /// String value, quotes excluded
    String,

    /// Numeric value
    Number,

    /// `true` literal
    True,

    /// `false` literal
    False,

    /// `null` literal
    Null,
}

impl TokenKind {
    /// Returns the stable upper-snake name of the kind, e.g. `BRACE_OPEN`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BraceOpen => "BRACE_OPEN",
            Self::BraceClose => "BRACE_CLOSE",
            Self::BracketOpen => "BRACKET_OPEN",
            Self::BracketClose => "BRACKET_CLOSE",
            Self::Colon => "COLON",
            Self::Comma => "COMMA",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
        }
    }

    /// Whether the kind is one of the single-character structural tokens.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            Self::BraceOpen
                | Self::BraceClose
                | Self::BracketOpen
                | Self::BracketClose
                | Self::Colon
                | Self::Comma
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit of a JSON document.
///
/// `start` and `end` form a half-open range of Unicode scalar value offsets
/// (not byte offsets) into the input. For strings the range covers only the
/// content between the quotes.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    start: usize,
    end: usize,
    width: usize,
}

impl Token {
    pub(crate) fn new(
        kind: TokenKind,
        lexeme: String,
        start: usize,
        end: usize,
    ) -> Self {
        debug_assert!(start <= end);
        Self {
            kind,
            lexeme,
            start,
            end,
            width: end - start,
        }
    }

    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact text the token covers. Escape sequences inside strings are
    /// left undecoded.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Offset of the first scalar value of the token.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last scalar value of the token.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of scalar values covered, always `end - start`.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}..{}]", self.kind, self.start, self.end)?;
        match self.kind {
            TokenKind::String => write!(f, " \"{}\"", self.lexeme),
            _ => write!(f, " {}", self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_tracks_span() {
        let token = Token::new(TokenKind::Number, "-12.5".to_string(), 3, 8);
        assert_eq!(token.width(), 5);
        assert_eq!(token.width(), token.end() - token.start());
    }

    #[test]
    fn kind_names() {
        assert_eq!(TokenKind::BracketClose.to_string(), "BRACKET_CLOSE");
        assert_eq!(TokenKind::Null.name(), "NULL");
        assert!(TokenKind::Comma.is_structural());
        assert!(!TokenKind::String.is_structural());
    }

    #[test]
    fn display_quotes_strings() {
        let string = Token::new(TokenKind::String, "ab".to_string(), 1, 3);
        assert_eq!(string.to_string(), "STRING[1..3] \"ab\"");

        let colon = Token::new(TokenKind::Colon, ":".to_string(), 4, 5);
        assert_eq!(colon.to_string(), "COLON[4..5] :");
    }

    #[test]
    fn serializes_with_upper_snake_kind() {
        let token = Token::new(TokenKind::BraceOpen, "{".to_string(), 0, 1);
        let json = serde_json::to_value(&token).expect("token serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "BRACE_OPEN",
                "lexeme": "{",
                "start": 0,
                "end": 1,
                "width": 1
            })
        );
    }
}
