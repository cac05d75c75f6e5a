//! # JSON Lexer
//!
//! Splits the text of a JSON document into a sequence of [`Token`]s, or
//! reports the first [`LexError`] encountered. All positions are offsets in
//! Unicode scalar values (`char`s), not bytes.
use crate::clock::{Clock, SystemClock};
use crate::tokenizer::{LexError, LexErrorKind, Token, TokenKind};
use unicode_general_category::{GeneralCategory, get_general_category};

/// Keyword literals, matched by prefix only. `truefoo` lexes `true` and then
/// carries on at `foo`.
const KEYWORDS: [(&str, TokenKind); 3] = [
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
];

/// A single-pass lexer over the scalar values of one input document.
struct Lexer<'c, C: ?Sized> {
    /// The input decoded into scalar values
    input: Vec<char>,
    /// Current position (index of the scalar value under examination)
    position: usize,
    /// Timestamps any error raised
    clock: &'c C,
}

impl<'c, C: Clock + ?Sized> Lexer<'c, C> {
    fn new(input: &str, clock: &'c C) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            clock,
        }
    }

    /// Returns the scalar value under the cursor, or `None` past the end.
    fn current(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn error(&self, kind: LexErrorKind, position: usize) -> LexError {
        LexError::new(kind, position, self.clock.now())
    }

    fn text(&self, start: usize, end: usize) -> String {
        self.input[start..end].iter().collect()
    }

    /// Consume whitespace starting from the current position.
    fn skip_whitespace(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Returns the next token from the current position, `None` once the
    /// input is exhausted.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(c) = self.current() else {
            return Ok(None);
        };

        let token = match c {
            '{' => self.read_structural(TokenKind::BraceOpen),
            '}' => self.read_structural(TokenKind::BraceClose),
            '[' => self.read_structural(TokenKind::BracketOpen),
            ']' => self.read_structural(TokenKind::BracketClose),
            ':' => self.read_structural(TokenKind::Colon),
            ',' => self.read_structural(TokenKind::Comma),
            '"' => self.read_string()?,
            _ => match self.read_keyword() {
                Some(token) => token,
                None if c == '-' || is_decimal_digit(c) => self.read_number()?,
                None => {
                    return Err(self.error(
                        LexErrorKind::UnexpectedCharacter,
                        self.position,
                    ));
                }
            },
        };

        Ok(Some(token))
    }

    /// Emits a width-1 punctuation token for the scalar under the cursor.
    fn read_structural(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.advance();
        Token::new(kind, self.text(start, self.position), start, self.position)
    }

    /// Reads a `true`/`false`/`null` literal if the remaining input starts
    /// with one.
    fn read_keyword(&mut self) -> Option<Token> {
        let rest = &self.input[self.position..];
        let (keyword, kind) = KEYWORDS.into_iter().find(|(keyword, _)| {
            rest.len() >= keyword.len()
                && rest.iter().copied().zip(keyword.chars()).all(|(a, b)| a == b)
        })?;

        let start = self.position;
        self.position += keyword.len();
        Some(Token::new(kind, keyword.to_string(), start, self.position))
    }

    /// Reads a string value. The token spans only the content between the
    /// quotes; escapes are skipped over but not decoded.
    fn read_string(&mut self) -> Result<Token, LexError> {
        let quote = self.position;
        self.advance();
        let start = self.position;

        loop {
            match self.current() {
                None => {
                    return Err(
                        self.error(LexErrorKind::UnterminatedString, quote)
                    );
                }
                Some('"') => break,
                // skip the escaped scalar so `\"` does not end the string
                Some('\\') => self.position += 2,
                Some(_) => self.advance(),
            }
        }

        let end = self.position;
        // closing quote
        self.advance();

        Ok(Token::new(TokenKind::String, self.text(start, end), start, end))
    }

    /// Reads a number (int, frac, exp). The cursor is on a `-` or a digit.
    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        self.advance();

        let mut seen_fraction = false;
        let mut seen_exponent = false;
        let mut exponent_digits = 0;

        while let Some(c) = self.current() {
            match c {
                c if is_decimal_digit(c) => {
                    self.advance();
                    if seen_exponent {
                        exponent_digits += 1;
                    }
                }
                '.' => {
                    if seen_fraction || seen_exponent {
                        return Err(self.error(
                            LexErrorKind::InvalidNumberFormat,
                            self.position,
                        ));
                    }
                    seen_fraction = true;
                    self.advance();
                }
                'e' | 'E' => {
                    if seen_exponent {
                        return Err(self.error(
                            LexErrorKind::MultipleExponents,
                            self.position,
                        ));
                    }
                    seen_exponent = true;
                    self.advance();
                    if matches!(self.current(), Some('+' | '-')) {
                        self.advance();
                    }
                }
                _ => break,
            }
        }

        if seen_exponent && exponent_digits == 0 {
            return Err(
                self.error(LexErrorKind::ExponentRequiresDigits, self.position)
            );
        }

        let literal = &self.input[start..self.position];
        if !has_valid_leading_form(literal) {
            return Err(self.error(LexErrorKind::InvalidNumber, start));
        }

        Ok(Token::new(
            TokenKind::Number,
            literal.iter().collect(),
            start,
            self.position,
        ))
    }
}

/// Any Unicode decimal digit (general category `Nd`), not just ASCII.
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
        || get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Rejects a bare `-`, a `-` followed by `0`, and anything starting with `0`.
///
/// The last rule also rejects the single literal `0`.
const fn has_valid_leading_form(literal: &[char]) -> bool {
    !matches!(literal, ['-'] | ['-', '0', ..] | ['0', ..])
}

/// Tokenize a JSON document into its token sequence, stamping any error with
/// the system clock.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered; no partial token sequence is
/// produced alongside it.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with_clock(input, &SystemClock)
}

/// Tokenize a JSON document, stamping any error with the given clock.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered; no partial token sequence is
/// produced alongside it.
pub fn tokenize_with_clock<C: Clock + ?Sized>(
    input: &str,
    clock: &C,
) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input, clock);
    if lexer.input.is_empty() {
        return Err(lexer.error(LexErrorKind::EmptyInput, 0));
    }

    let mut tokens: Vec<Token> = vec![];
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}
