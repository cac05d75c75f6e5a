//! Property-based tests for the tokenizer.
//!
//! Documents are generated from well-formed fragments (punctuation, strings,
//! numbers, keywords) separated by whitespace, and checked for:
//! 1. Ordering: token spans strictly increase and never overlap
//! 2. Coverage: every scalar value is in a token, a whitespace gap, or a quote
//! 3. Round trip: the source can be rebuilt from the tokens
//! 4. Idempotence: tokenizing twice gives the same result

use jsonlex::clock::FixedClock;
use jsonlex::{LexError, Token, TokenKind, reconstruct, tokenize_with_clock};
use proptest::prelude::*;

fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with_clock(input, &FixedClock::default())
}

// -- Input Generation Strategies --

fn structural_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["{", "}", "[", "]", ":", ","]).prop_map(String::from)
}

fn keyword_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["true", "false", "null"]).prop_map(String::from)
}

/// Quoted string with arbitrary unescaped content and backslash pairs.
fn string_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"([^"\\]|\\.){0,8}"#)
        .expect("valid regex")
        .prop_map(|content| format!("\"{content}\""))
}

/// Numbers the lexer accepts: no leading zero, optional fraction and
/// exponent.
fn number_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"-?[1-9][0-9]{0,5}(\.[0-9]{1,3})?([eE][+-]?[0-9]{1,2})?")
        .expect("valid regex")
}

fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        structural_strategy(),
        keyword_strategy(),
        string_strategy(),
        number_strategy(),
    ]
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![" ", "\t", "\n", "\r\n", "\u{00A0}", "\u{3000}"]),
        1..3,
    )
    .prop_map(|parts| parts.concat())
}

/// A document together with the number of tokens it should produce.
fn document_strategy() -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec((fragment_strategy(), whitespace_strategy()), 1..40)
        .prop_map(|parts| {
            let count = parts.len();
            let text: String = parts
                .into_iter()
                .map(|(fragment, space)| fragment + &space)
                .collect();
            (text, count)
        })
}

fn assert_ordered(tokens: &[Token]) -> Result<(), TestCaseError> {
    for token in tokens {
        prop_assert_eq!(token.width(), token.end() - token.start());
    }
    for pair in tokens.windows(2) {
        prop_assert!(pair[0].start() < pair[1].start());
        prop_assert!(pair[0].end() <= pair[1].start());
    }
    Ok(())
}

fn assert_covered(input: &str, tokens: &[Token]) -> Result<(), TestCaseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut covered = vec![false; chars.len()];
    for token in tokens {
        covered[token.start()..token.end()].fill(true);
        if token.kind() == TokenKind::String {
            prop_assert_eq!(chars[token.start() - 1], '"');
            prop_assert_eq!(chars[token.end()], '"');
            covered[token.start() - 1] = true;
            covered[token.end()] = true;
        }
    }
    for (c, _) in chars.iter().zip(&covered).filter(|(_, covered)| !**covered) {
        prop_assert!(c.is_whitespace(), "uncovered non-whitespace {:?}", c);
    }
    Ok(())
}

proptest! {
    #[test]
    fn well_formed_documents_tokenize((input, count) in document_strategy()) {
        let tokens = lex(&input).expect("generated document should tokenize");
        prop_assert_eq!(tokens.len(), count);
        assert_ordered(&tokens)?;
        assert_covered(&input, &tokens)?;
    }

    #[test]
    fn round_trip((input, _) in document_strategy()) {
        let tokens = lex(&input).expect("generated document should tokenize");
        prop_assert_eq!(reconstruct(&input, &tokens), input);
    }

    #[test]
    fn idempotent(input in ".{0,40}") {
        prop_assert_eq!(lex(&input), lex(&input));
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".{0,60}") {
        match lex(&input) {
            Ok(tokens) => {
                assert_ordered(&tokens)?;
                assert_covered(&input, &tokens)?;
                prop_assert_eq!(reconstruct(&input, &tokens), input);
            }
            Err(err) => {
                prop_assert!(err.position() <= input.chars().count());
            }
        }
    }
}
