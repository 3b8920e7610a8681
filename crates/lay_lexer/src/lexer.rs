//! Lexer implementation.
//!
//! Scans source text into leaf tokens (identifiers, keywords, operators,
//! symbols, literals) and drives the layout algorithm on line breaks,
//! brackets and implicit openers.
//!
//! Design: single linear pass; the indent-context stack is the only state
//! threaded between steps. The run stops at the first failure and keeps the
//! tokens produced before it.
//!
//! Related: `layout` (synthetic tokens), `scan` (leaf scanners).
use lay_syntax::{Literal, Position, PositionedToken, Token};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords::{ASSIGN, RESERVED_SYMBOLS, RESERVED_WORDS, WordClass};
use crate::layout::{self, Opener};
use crate::{Bracket, IndentStack, LayoutError, LexError, scan};

/// Lexing result: the tokens produced, and the failure that stopped the run
/// if there was one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexResult {
    pub tokens: Vec<PositionedToken>,
    pub error: Option<LexError>,
}

impl LexResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<Vec<PositionedToken>, LexError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.tokens),
        }
    }
}

/// Lex `input` in one call.
pub fn lex(input: &str) -> Result<Vec<PositionedToken>, LexError> {
    Lexer::new(input).lex().into_result()
}

/// Layout-sensitive lexer.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    stack: IndentStack,
    tokens: Vec<PositionedToken>,
    /// Scratch buffer for the tokens of one step.
    pending: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            stack: IndentStack::new(),
            tokens: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Run the lexer to the end of input or the first failure.
    pub fn lex(mut self) -> LexResult {
        let approx = self.cursor.rest().len().saturating_div(4).max(32);
        self.tokens.reserve(approx);
        let error = self.run().err();
        match &error {
            Some(err) => debug!(tokens = self.tokens.len(), %err, "lexing failed"),
            None => debug!(tokens = self.tokens.len(), "lexing finished"),
        }
        LexResult {
            tokens: self.tokens,
            error,
        }
    }

    fn run(&mut self) -> Result<(), LexError> {
        self.lex_first_line()?;
        loop {
            self.cursor.skip_spacing();
            let Some(c) = self.cursor.peek() else { break };
            let start = self.cursor.pos();
            if self.lex_leaf(start) {
                continue;
            }
            if let Some(bracket) = Bracket::from_open(c) {
                self.cursor.bump();
                layout::open_bracket(&mut self.stack, bracket, &mut self.pending);
                self.flush(start);
                continue;
            }
            if let Some(bracket) = Bracket::from_close(c) {
                self.cursor.bump();
                layout::close_bracket(&mut self.stack, bracket, &mut self.pending)
                    .map_err(|e| self.fail(e, start))?;
                self.flush(start);
                continue;
            }
            if self.cursor.at_line_break() {
                self.lex_line_break(start)?;
                continue;
            }
            return Err(LexError::no_match(c, start));
        }
        let end = self.cursor.pos();
        self.close_all(end)
    }

    /// The first significant line is measured like any line after a break.
    fn lex_first_line(&mut self) -> Result<(), LexError> {
        self.cursor.skip_spacing();
        if let Some(col) = self.cursor.skip_line_run() {
            let line_start = self.cursor.pos();
            layout::line_break(&mut self.stack, col, &mut self.pending)
                .map_err(|e| self.fail(e, line_start))?;
        }
        Ok(())
    }

    fn lex_line_break(&mut self, start: Position) -> Result<(), LexError> {
        let Some(col) = self.cursor.skip_line_run() else {
            return self.close_all(start);
        };
        let line_start = self.cursor.pos();
        layout::line_break(&mut self.stack, col, &mut self.pending)
            .map_err(|e| self.fail(e, line_start))?;
        self.flush(start);
        Ok(())
    }

    /// End of input: drive the stack back to empty as a line break to
    /// column 0 would, tagging the closes with `tag`.
    fn close_all(&mut self, tag: Position) -> Result<(), LexError> {
        let end = self.cursor.pos();
        // Innermost bracket still open, even under layout contexts.
        if let Some(bracket) = self.stack.iter().filter_map(|c| c.bracket()).last() {
            return Err(LayoutError::indentation(format!(
                "unclosed '{}' at end of input",
                bracket.open_str()
            ))
            .at(end));
        }
        layout::line_break(&mut self.stack, 0, &mut self.pending)
            .map_err(|e| self.fail(e, end))?;
        self.flush(tag);
        debug_assert!(self.stack.is_empty());
        Ok(())
    }

    /// Try the leaf scanners in priority order. Returns whether one matched.
    fn lex_leaf(&mut self, start: Position) -> bool {
        let rest = self.cursor.rest();
        let (len, token) = if let Some(m) = scan::raw(rest) {
            (m.len, Token::RawLit(m.text.to_string()))
        } else if let Some(m) = scan::quoted(rest) {
            (m.len, Token::Lit(Literal::Str(m.text.to_string())))
        } else if let Some(s) = scan::number(rest) {
            (s.len(), Token::Lit(Literal::Number(s.to_string())))
        } else if let Some(s) = scan::identifier(rest) {
            (s.len(), classify_word(s))
        } else if let Some(m) = self.regex_allowed().then(|| scan::regex(rest)).flatten() {
            let lit = Literal::Regex {
                pattern: m.pattern.to_string(),
                flags: m.flags.to_string(),
            };
            (m.len, Token::Lit(lit))
        } else if let Some(s) = scan::operator(rest) {
            (s.len(), classify_operator(s))
        } else if let Some(s) = scan::punctuation(rest) {
            (s.len(), Token::symbol(s))
        } else {
            return false;
        };
        self.cursor.advance(len);

        let opener = match &token {
            Token::Keyword(w) if RESERVED_WORDS.get(w.as_str()) == Some(&WordClass::Layout) => {
                Some(Opener::Block)
            }
            Token::Symbol(s) if s == ASSIGN && self.ends_line() => Some(Opener::Statement),
            _ => None,
        };
        self.pending.push(token);
        self.flush(start);
        if let Some(opener) = opener {
            self.open_implicit(opener);
        }
        true
    }

    /// A regex may start only where an operand may.
    fn regex_allowed(&self) -> bool {
        self.tokens
            .last()
            .is_none_or(|t| !t.token.is_operand_end())
    }

    /// Only spacing or a comment remains before the next line break.
    fn ends_line(&self) -> bool {
        let mut probe = self.cursor.clone();
        probe.skip_spacing();
        probe.at_line_break()
    }

    /// Open the block or statement that starts at the next token. When that
    /// token is on a later line the line-break run belongs to the opener and
    /// produces no layout tokens of its own.
    fn open_implicit(&mut self, opener: Opener) {
        let start = self.cursor.pos();
        let mut probe = self.cursor.clone();
        probe.skip_spacing();
        let crosses_lines = probe.at_line_break();
        let first_col = if crosses_lines {
            probe.skip_line_run()
        } else if probe.is_eof() {
            None
        } else {
            Some(probe.indent())
        };
        let pushed = layout::open_layout(&mut self.stack, opener, first_col, &mut self.pending);
        if pushed && crosses_lines {
            self.cursor = probe;
        }
        self.flush(start);
    }

    fn flush(&mut self, pos: Position) {
        for token in self.pending.drain(..) {
            trace!(%pos, ?token, depth = self.stack.depth(), "emit");
            self.tokens.push(PositionedToken::new(pos, token));
        }
    }

    /// Tokens of the failing step are dropped.
    fn fail(&mut self, err: LayoutError, pos: Position) -> LexError {
        self.pending.clear();
        err.at(pos)
    }
}

fn classify_word(word: &str) -> Token {
    match RESERVED_WORDS.get(word) {
        Some(WordClass::Keyword | WordClass::Layout) => Token::Keyword(word.to_string()),
        Some(WordClass::Const) => Token::Lit(Literal::Const(word.to_string())),
        None => Token::Ident(word.to_string()),
    }
}

fn classify_operator(op: &str) -> Token {
    if RESERVED_SYMBOLS.contains(op) {
        Token::Symbol(op.to_string())
    } else {
        Token::Operator(op.to_string())
    }
}
