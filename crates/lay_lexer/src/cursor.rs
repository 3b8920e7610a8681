use lay_syntax::{Position, is_inline_space, is_line_break};

/// Read position in the input, tracking line and column as it advances.
///
/// Cloning is cheap; lookahead works on a clone and commits by assignment.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    i: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            i: 0,
            line: 1,
            col: 1,
        }
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.i..]
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.i >= self.input.len()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn pos(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Layout column of the cursor (0-based).
    pub(crate) fn indent(&self) -> u32 {
        self.col - 1
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        match c {
            '\n' => {
                self.line += 1;
                self.col = 1;
            }
            // `\r\n` counts once, on the `\n`.
            '\r' if self.peek() == Some('\n') => {}
            '\r' => {
                self.line += 1;
                self.col = 1;
            }
            _ => self.col += 1,
        }
        Some(c)
    }

    /// Advance over `len` bytes of already-scanned text.
    pub(crate) fn advance(&mut self, len: usize) {
        let end = (self.i + len).min(self.input.len());
        while self.i < end {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// Skip spaces, tabs and a trailing `#` comment. Line breaks are kept.
    pub(crate) fn skip_spacing(&mut self) {
        while let Some(c) = self.peek() {
            if is_inline_space(c) {
                self.bump();
            } else if c == '#' {
                while self.peek().is_some_and(|c| !is_line_break(c)) {
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    pub(crate) fn at_line_break(&self) -> bool {
        self.peek().is_some_and(is_line_break)
    }

    /// Consume one line break (`\n`, `\r\n` or `\r`).
    pub(crate) fn eat_line_break(&mut self) -> bool {
        match self.peek() {
            Some('\r') => {
                self.bump();
                if self.peek() == Some('\n') {
                    self.bump();
                }
                true
            }
            Some('\n') => {
                self.bump();
                true
            }
            _ => false,
        }
    }

    /// Consume a run of line breaks together with blank and comment-only
    /// lines, stopping at the first significant character. Returns that
    /// character's layout column, or `None` at end of input.
    pub(crate) fn skip_line_run(&mut self) -> Option<u32> {
        while self.eat_line_break() {
            self.skip_spacing();
        }
        if self.is_eof() { None } else { Some(self.indent()) }
    }
}
