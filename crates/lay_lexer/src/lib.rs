//! lay_lexer: layout-sensitive lexer crate.
//!
//! Normalizes source text and tokenizes it into a positioned token stream,
//! inserting synthetic block/statement/separator tokens from indentation.
//! Entry points: `Lexer::new(input).lex()` and `normalize_source`.
mod cursor;
mod error;
mod keywords;
pub mod layout;
mod lexer;
mod normalize;
pub mod scan;
mod stack;

pub use error::{LayoutError, LexError, LexErrorKind};
pub use lexer::{LexResult, Lexer, lex};
pub use normalize::normalize_source;
pub use stack::{Bracket, IndentContext, IndentStack};
