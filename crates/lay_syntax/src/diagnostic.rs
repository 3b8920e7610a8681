//!
//!

use crate::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub code: Option<&'static str>,
    pub position: Option<Position>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, position: Option<Position>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            code: None,
            position,
        }
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

pub mod codes {
    pub const INDENTATION: &str = "E0101";
    pub const BRACKET: &str = "E0102";
    pub const NO_MATCH: &str = "E0103";
}
