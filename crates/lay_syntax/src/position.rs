//! Source positions.
//!
//! Both fields are 1-based. Layout thresholds are 0-based indentation widths,
//! so a token whose line starts at indentation `n` has `column == n + 1`.
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Indentation width implied by this column.
    pub fn indent(self) -> u32 {
        self.column.saturating_sub(1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
