//!
//!

use std::fs;
use std::time::Instant;

use lay_lexer::{Lexer, normalize_source};
use lay_syntax::{Diagnostic, PositionedToken, SourceFile};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default)]
pub struct Driver;

#[derive(Clone, Debug)]
pub struct LexedFile {
    pub source: SourceFile,
    /// Tokens produced before the first failure, or all of them.
    pub tokens: Vec<PositionedToken>,
    pub diagnostics: Vec<Diagnostic>,
    pub timings: Timings,
}

impl LexedFile {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Timings {
    pub normalize_us: u128,
    pub lex_us: u128,
}

impl Driver {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn lex_file(&self, path: &str) -> Result<LexedFile, String> {
        let input =
            fs::read_to_string(path).map_err(|e| format!("Failed to read file {path}: {e}"))?;
        Ok(self.lex_text(path, &input))
    }

    #[tracing::instrument(level = "debug", skip(self, input), fields(bytes = input.len()))]
    pub fn lex_text(&self, path: &str, input: &str) -> LexedFile {
        let t1 = Instant::now();
        let normalized = normalize_source(input).into_owned();
        let t2 = Instant::now();
        let source = SourceFile::new(path, normalized);
        let result = Lexer::new(source.text.as_str()).lex();
        let t3 = Instant::now();

        let diagnostics = result.error.iter().map(Diagnostic::from).collect();
        let timings = Timings {
            normalize_us: (t2 - t1).as_micros(),
            lex_us: (t3 - t2).as_micros(),
        };
        debug!(
            tokens = result.tokens.len(),
            failed = result.error.is_some(),
            lex_us = timings.lex_us,
            "lexed"
        );

        LexedFile {
            source,
            tokens: result.tokens,
            diagnostics,
            timings,
        }
    }
}
