//! Token definitions.
//!
//! Leaf tokens carry the text they were scanned from. Layout tokens
//! (block/statement open and close, line separator) are synthetic and carry
//! nothing; the lexer inserts them so indentation alone conveys nesting.
use std::fmt;

use crate::Position;

/// Literal payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Decimal (with optional fraction) or `0x` hexadecimal number.
    Number(String),
    /// Body of a `'…'` or `"…"` literal, escapes kept verbatim.
    Str(String),
    /// `/pattern/flags`
    Regex { pattern: String, flags: String },
    /// Reserved constant such as `true` or `null`.
    Const(String),
}

/// Token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Identifier.
    Ident(String),
    /// Reserved word.
    Keyword(String),
    /// Operator not in the reserved symbol table.
    Operator(String),
    /// Reserved symbol, punctuation or bracket.
    Symbol(String),
    /// Body of a raw literal.
    RawLit(String),
    /// Literal.
    Lit(Literal),
    /// Start of a layout block.
    BlockOpen,
    /// End of a layout block.
    BlockClose,
    /// Start of a multi-line statement.
    StmtOpen,
    /// End of a multi-line statement.
    StmtClose,
    /// Statement boundary inside a block or statement.
    LineSep,
}

impl Token {
    pub fn symbol(s: &str) -> Self {
        Token::Symbol(s.to_string())
    }

    /// Whether the layout algorithm inserted this token.
    pub fn is_synthetic(&self) -> bool {
        matches!(
            self,
            Token::BlockOpen | Token::BlockClose | Token::StmtOpen | Token::StmtClose | Token::LineSep
        )
    }

    /// Whether this token ends an operand, e.g. `x`, `1`, `)`.
    pub fn is_operand_end(&self) -> bool {
        match self {
            Token::Ident(_) | Token::Lit(_) | Token::RawLit(_) => true,
            Token::Symbol(s) => matches!(s.as_str(), ")" | "]" | "}"),
            _ => false,
        }
    }

    /// Short kind name, used by the `tokens` command.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Ident(_) => "Ident",
            Token::Keyword(_) => "Keyword",
            Token::Operator(_) => "Operator",
            Token::Symbol(_) => "Symbol",
            Token::RawLit(_) => "RawLit",
            Token::Lit(Literal::Number(_)) => "Number",
            Token::Lit(Literal::Str(_)) => "Str",
            Token::Lit(Literal::Regex { .. }) => "Regex",
            Token::Lit(Literal::Const(_)) => "Const",
            Token::BlockOpen => "BlockOpen",
            Token::BlockClose => "BlockClose",
            Token::StmtOpen => "StmtOpen",
            Token::StmtClose => "StmtClose",
            Token::LineSep => "LineSep",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s)
            | Token::Keyword(s)
            | Token::Operator(s)
            | Token::Symbol(s)
            | Token::Lit(Literal::Number(s))
            | Token::Lit(Literal::Const(s)) => f.write_str(s),
            Token::RawLit(s) => write!(f, "```{s}```"),
            Token::Lit(Literal::Str(s)) => write!(f, "\"{s}\""),
            Token::Lit(Literal::Regex { pattern, flags }) => write!(f, "/{pattern}/{flags}"),
            Token::BlockOpen => f.write_str("{block"),
            Token::BlockClose => f.write_str("block}"),
            Token::StmtOpen => f.write_str("{stmt"),
            Token::StmtClose => f.write_str("stmt}"),
            Token::LineSep => f.write_str(";;"),
        }
    }
}

/// Token tagged with the position where the attempt that produced it began.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PositionedToken {
    pub pos: Position,
    pub token: Token,
}

impl PositionedToken {
    pub fn new(pos: Position, token: Token) -> Self {
        Self { pos, token }
    }
}
