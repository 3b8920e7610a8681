//! Lexer failures.
//!
//! Layout and bracket handlers report a `LayoutError` (what went wrong); the
//! driver attaches the position and turns it into a `LexError`.
use std::fmt;

use lay_syntax::{Diagnostic, Position, codes};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// Indentation is incompatible with every context on the stack.
    Indentation,
    /// Mismatched or unbalanced bracket character.
    Bracket,
    /// Nothing accepts the character at the cursor.
    NoMatch,
}

impl LexErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            LexErrorKind::Indentation => codes::INDENTATION,
            LexErrorKind::Bracket => codes::BRACKET,
            LexErrorKind::NoMatch => codes::NO_MATCH,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LexErrorKind::Indentation => "indentation error",
            LexErrorKind::Bracket => "bracket error",
            LexErrorKind::NoMatch => "no valid token",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct LayoutError {
    pub kind: LexErrorKind,
    pub message: String,
}

impl LayoutError {
    pub fn indentation(message: impl Into<String>) -> Self {
        Self {
            kind: LexErrorKind::Indentation,
            message: message.into(),
        }
    }

    pub fn bracket(message: impl Into<String>) -> Self {
        Self {
            kind: LexErrorKind::Bracket,
            message: message.into(),
        }
    }

    pub fn at(self, pos: Position) -> LexError {
        LexError {
            kind: self.kind,
            message: self.message,
            pos,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {pos}: {message}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub message: String,
    pub pos: Position,
}

impl LexError {
    pub fn no_match(found: char, pos: Position) -> Self {
        Self {
            kind: LexErrorKind::NoMatch,
            message: format!("no valid token at {found:?}"),
            pos,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(format!("{}: {}", self.kind, self.message), Some(self.pos))
            .with_code(self.kind.code())
    }
}

impl From<&LexError> for Diagnostic {
    fn from(err: &LexError) -> Self {
        err.to_diagnostic()
    }
}
