//! lay_syntax: shared syntax types.
//!
//! Token model, source positions, source text and diagnostics used by the
//! lexer, the file front end and the CLI.
mod diagnostic;
mod position;
mod render;
mod source;
mod token;
mod util;

pub use diagnostic::{Diagnostic, Severity, codes};
pub use position::Position;
pub use render::render_diagnostic;
pub use source::{SourceFile, SourceText};
pub use token::{Literal, PositionedToken, Token};
pub use util::{
    is_hex_digit, is_ident_continue, is_ident_start, is_inline_space, is_line_break,
    is_operator_char, is_regex_flag,
};
