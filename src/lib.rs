/*!
# `jsonlex` Library

Lexical front end for JSON: turns a document's text into an ordered sequence
of tokens whose spans are measured in Unicode scalar values.

```rust
use jsonlex::{tokenize, TokenKind};

let tokens = tokenize(r#"{"ok":true}"#).expect("valid JSON text");
assert_eq!(tokens[1].kind(), TokenKind::String);
assert_eq!(tokens[1].lexeme(), "ok");
assert_eq!((tokens[1].start(), tokens[1].end()), (2, 4));
```

Lexing stops at the first problem:

```rust
use jsonlex::{tokenize, LexErrorKind};

let err = tokenize("[1e]").unwrap_err();
assert_eq!(err.kind(), LexErrorKind::ExponentRequiresDigits);
assert_eq!(err.position(), 3);
```
*/

pub mod clock;
pub mod commands;
pub mod tokenizer;
mod utils;

pub use tokenizer::{
    LexError, LexErrorKind, Token, TokenKind, tokenize, tokenize_with_clock,
};
pub use utils::*;
