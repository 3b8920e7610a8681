//! Indent-context stack.
//!
//! Pure storage: push, pop and peek of typed nesting contexts. All policy
//! lives in `layout`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bracket {
    Paren,
    Square,
    Brace,
}

impl Bracket {
    pub fn from_open(c: char) -> Option<Self> {
        match c {
            '(' => Some(Bracket::Paren),
            '[' => Some(Bracket::Square),
            '{' => Some(Bracket::Brace),
            _ => None,
        }
    }

    pub fn from_close(c: char) -> Option<Self> {
        match c {
            ')' => Some(Bracket::Paren),
            ']' => Some(Bracket::Square),
            '}' => Some(Bracket::Brace),
            _ => None,
        }
    }

    pub fn open_str(self) -> &'static str {
        match self {
            Bracket::Paren => "(",
            Bracket::Square => "[",
            Bracket::Brace => "{",
        }
    }

    pub fn close_str(self) -> &'static str {
        match self {
            Bracket::Paren => ")",
            Bracket::Square => "]",
            Bracket::Brace => "}",
        }
    }

    pub fn context(self, threshold: u32) -> IndentContext {
        match self {
            Bracket::Paren => IndentContext::Paren(threshold),
            Bracket::Square => IndentContext::Square(threshold),
            Bracket::Brace => IndentContext::Brace(threshold),
        }
    }
}

/// A nesting context and its threshold column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndentContext {
    /// No context; what `peek` returns on an empty stack. Never stored.
    Empty,
    Block(u32),
    Statement(u32),
    Paren(u32),
    Square(u32),
    Brace(u32),
}

impl IndentContext {
    pub fn threshold(self) -> u32 {
        match self {
            IndentContext::Empty => 0,
            IndentContext::Block(n)
            | IndentContext::Statement(n)
            | IndentContext::Paren(n)
            | IndentContext::Square(n)
            | IndentContext::Brace(n) => n,
        }
    }

    pub fn bracket(self) -> Option<Bracket> {
        match self {
            IndentContext::Paren(_) => Some(Bracket::Paren),
            IndentContext::Square(_) => Some(Bracket::Square),
            IndentContext::Brace(_) => Some(Bracket::Brace),
            IndentContext::Empty | IndentContext::Block(_) | IndentContext::Statement(_) => None,
        }
    }

    /// Block or statement context.
    pub fn is_layout(self) -> bool {
        matches!(self, IndentContext::Block(_) | IndentContext::Statement(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndentStack {
    contexts: Vec<IndentContext>,
}

impl IndentStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peek(&self) -> IndentContext {
        self.contexts.last().copied().unwrap_or(IndentContext::Empty)
    }

    pub fn peek_threshold(&self) -> u32 {
        self.peek().threshold()
    }

    /// Pushing `Empty` does nothing.
    pub fn push(&mut self, ctx: IndentContext) {
        if ctx != IndentContext::Empty {
            self.contexts.push(ctx);
        }
    }

    /// Does nothing on an empty stack.
    pub fn pop(&mut self) {
        self.contexts.pop();
    }

    pub fn depth(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Contexts from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = IndentContext> + '_ {
        self.contexts.iter().copied()
    }
}
