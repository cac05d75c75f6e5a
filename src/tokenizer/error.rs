//! # Lexical Errors
//!
//! The lexer stops at the first problem it finds and reports it as a single
//! [`LexError`].
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::time::SystemTime;

/// The closed set of conditions that abort tokenization.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum LexErrorKind {
    /// The input contained no characters.
    EmptyInput,
    /// A `"` was opened but never closed by an unescaped `"`.
    UnterminatedString,
    /// A second `.` (or a `.` inside the exponent) within one number.
    InvalidNumberFormat,
    /// A second `e`/`E` within one number.
    MultipleExponents,
    /// An exponent marker with no digit after it.
    ExponentRequiresDigits,
    /// A number starting with `0`, or a `-` not followed by a nonzero digit.
    InvalidNumber,
    /// A character that starts no known token.
    UnexpectedCharacter,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::EmptyInput => "No input to parse",
            Self::UnterminatedString => "Unterminated string",
            Self::InvalidNumberFormat => "Invalid number format",
            Self::MultipleExponents => "Multiple exponents not allowed",
            Self::ExponentRequiresDigits => "Exponent requires digits",
            Self::InvalidNumber => "Invalid number",
            Self::UnexpectedCharacter => "Unexpected character",
        };
        f.write_str(message)
    }
}

/// Terminal failure of a tokenize call.
///
/// `position` is the scalar value offset at which the problem was detected,
/// which is not always where the offending token started.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct LexError {
    kind: LexErrorKind,
    position: usize,
    occurred_at: SystemTime,
}

impl LexError {
    pub(crate) const fn new(
        kind: LexErrorKind,
        position: usize,
        occurred_at: SystemTime,
    ) -> Self {
        Self {
            kind,
            position,
            occurred_at,
        }
    }

    /// What went wrong.
    #[must_use]
    pub const fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// Offset of the scalar value where the problem was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// When the error was captured. Informational only.
    #[must_use]
    pub const fn occurred_at(&self) -> SystemTime {
        self.occurred_at
    }
}

impl Error for LexError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position() {
        let err = LexError::new(
            LexErrorKind::MultipleExponents,
            7,
            SystemTime::UNIX_EPOCH,
        );
        assert_eq!(err.to_string(), "Multiple exponents not allowed at position 7");
    }

    #[test]
    fn serializes_kind_and_position() {
        let err =
            LexError::new(LexErrorKind::EmptyInput, 0, SystemTime::UNIX_EPOCH);
        let json = serde_json::to_value(&err).expect("error serializes");
        assert_eq!(json["kind"], "EmptyInput");
        assert_eq!(json["position"], 0);
        assert_eq!(json["occurred_at"]["secs_since_epoch"], 0);
    }
}
