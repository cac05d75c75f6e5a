//! Miscellaneous utility functions for presenting tokenizer output.

use anyhow::Context as _;
use colored::{ColoredString, Colorize};
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::tokenizer::{LexError, Token, TokenKind};

/// Width of the kind column; fits the longest name, `BRACKET_CLOSE`.
const KIND_WIDTH: usize = 13;

/// Rebuilds the source text from its tokens.
///
/// Gaps between token spans (whitespace and the quotes around strings) are
/// copied from `input`; every token contributes its own lexeme. For any
/// successful tokenization of `input` the result equals `input`.
///
/// `tokens` must come from tokenizing `input`.
#[must_use]
pub fn reconstruct(input: &str, tokens: &[Token]) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;

    for token in tokens {
        out.extend(&chars[cursor..token.start()]);
        out.push_str(token.lexeme());
        cursor = token.end();
    }
    out.extend(&chars[cursor..]);

    out
}

// ==============================================================================
// Colorized Token Output
// ==============================================================================

/// Write one line per token (`KIND  start..end  lexeme`) to `writer`.
/// Silently returns `Ok(())` on broken pipe so that piping to tools like
/// `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_colored_tokens<W: Write>(
    writer: &mut W,
    tokens: &[Token],
    show_lexeme: bool,
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        for token in tokens {
            let span = format!("{}..{}", token.start(), token.end());
            write!(
                writer,
                "{} {}",
                paint_kind(token.kind()),
                format!("{span:<11}").dimmed()
            )?;
            if show_lexeme {
                write!(writer, " {}", paint_lexeme(token))?;
            }
            writeln!(writer)?;
        }
        Ok(())
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write token listing"),
    }
}

fn paint_kind(kind: TokenKind) -> ColoredString {
    let name = format!("{:<width$}", kind.name(), width = KIND_WIDTH);
    if kind.is_structural() {
        return name.dimmed();
    }
    paint_value(kind, name)
}

fn paint_lexeme(token: &Token) -> ColoredString {
    match token.kind() {
        kind if kind.is_structural() => token.lexeme().normal(),
        // NOTE: escapes are still raw, so re-wrapping in quotes gives back
        // the source text exactly.
        TokenKind::String => {
            paint_value(TokenKind::String, format!("\"{}\"", token.lexeme()))
        }
        kind => paint_value(kind, token.lexeme().to_string()),
    }
}

/// Colors shared by the kind and lexeme columns of value tokens.
fn paint_value(kind: TokenKind, text: String) -> ColoredString {
    match kind {
        TokenKind::String => text.green(),
        TokenKind::Number => text.yellow(),
        TokenKind::True | TokenKind::False => text.yellow().bold(),
        TokenKind::Null => text.red().dimmed(),
        _ => text.normal(),
    }
}

/// Write a diagnostic for `error` pointing at the offending column of
/// `input`, e.g.:
///
/// ```text
/// error: Unexpected character at position 4
///  --> line 1, column 5
///   |
/// 1 | [1, +2]
///   |     ^
/// ```
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_colored_error<W: Write>(
    writer: &mut W,
    input: &str,
    error: &LexError,
) -> anyhow::Result<()> {
    let (line, column, text) = locate(input, error.position());
    let gutter = " ".repeat(line.to_string().len());
    // keep tabs so the caret lines up with the source line
    let padding: String = text
        .chars()
        .take(column)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    let result = (|| -> io::Result<()> {
        writeln!(
            writer,
            "{}: {}",
            "error".red().bold(),
            error.to_string().bold()
        )?;
        writeln!(
            writer,
            "{gutter}{} line {line}, column {}",
            "-->".blue().bold(),
            column + 1
        )?;
        writeln!(writer, "{gutter} {}", "|".blue().bold())?;
        writeln!(
            writer,
            "{} {} {text}",
            line.to_string().blue().bold(),
            "|".blue().bold()
        )?;
        writeln!(
            writer,
            "{gutter} {} {padding}{}",
            "|".blue().bold(),
            "^".red().bold()
        )?;
        Ok(())
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write lex error diagnostic"),
    }
}

/// Returns the 1-based line number, the 0-based column (in scalar values)
/// and the text of the line containing `position`.
fn locate(input: &str, position: usize) -> (usize, usize, String) {
    let mut line = 1;
    let mut line_start = 0;
    for (i, c) in input.chars().enumerate().take(position) {
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let text = input
        .chars()
        .skip(line_start)
        .take_while(|&c| c != '\n' && c != '\r')
        .collect();

    (line, position - line_start, text)
}
