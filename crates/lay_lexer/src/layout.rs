//! Layout algorithm.
//!
//! Decides which synthetic tokens a line break, a bracket or an implicit
//! opener produces, given the indent-context stack. Functions here append to
//! `out` and never see the input text; the driver measures columns and tags
//! the tokens with positions.
//!
//! Columns are 0-based indentation widths.
use std::cmp::Ordering;

use lay_syntax::Token;
use tracing::trace;

use crate::{Bracket, IndentContext, IndentStack, LayoutError};

/// Kind of context an implicit opener introduces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opener {
    /// After `where`, `of` or `do`.
    Block,
    /// After `=` at the end of a line.
    Statement,
}

impl Opener {
    fn context(self, threshold: u32) -> IndentContext {
        match self {
            Opener::Block => IndentContext::Block(threshold),
            Opener::Statement => IndentContext::Statement(threshold),
        }
    }

    fn tokens(self) -> (Token, Token) {
        match self {
            Opener::Block => (Token::BlockOpen, Token::BlockClose),
            Opener::Statement => (Token::StmtOpen, Token::StmtClose),
        }
    }
}

/// Handle a run of line breaks whose final line starts at column `col`
/// (0 at end of input).
///
/// Emits closes for every context the new line falls out of, followed by at
/// most one `LineSep` or `StmtOpen`.
pub fn line_break(
    stack: &mut IndentStack,
    col: u32,
    out: &mut Vec<Token>,
) -> Result<(), LayoutError> {
    loop {
        let top = stack.peek();
        trace!(?top, col, "line break");
        match top {
            IndentContext::Paren(n) | IndentContext::Square(n) | IndentContext::Brace(n) => {
                if col > n {
                    return Ok(());
                }
                return Err(LayoutError::indentation(format!(
                    "line inside brackets must be indented past column {n}, found {col}"
                )));
            }
            IndentContext::Empty => {
                if col == 0 {
                    return Ok(());
                }
                return Err(LayoutError::indentation(format!(
                    "unexpected indentation {col} at the outermost level"
                )));
            }
            IndentContext::Statement(n) => match col.cmp(&n) {
                Ordering::Equal => {
                    out.push(Token::LineSep);
                    return Ok(());
                }
                Ordering::Greater => {
                    stack.push(IndentContext::Statement(col));
                    out.push(Token::StmtOpen);
                    return Ok(());
                }
                Ordering::Less => {
                    close_on_dedent(stack, col, n)?;
                    out.push(Token::StmtClose);
                }
            },
            IndentContext::Block(n) => match col.cmp(&n) {
                Ordering::Equal => {
                    out.push(Token::LineSep);
                    return Ok(());
                }
                Ordering::Greater => return Ok(()),
                Ordering::Less => {
                    close_on_dedent(stack, col, n)?;
                    out.push(Token::BlockClose);
                }
            },
        }
    }
}

/// Pop the top context for a dedent to `col`; the new top must not sit
/// strictly below `col`.
fn close_on_dedent(stack: &mut IndentStack, col: u32, closed: u32) -> Result<(), LayoutError> {
    stack.pop();
    let outer = stack.peek_threshold();
    if col > outer {
        return Err(LayoutError::indentation(format!(
            "indentation {col} falls between levels {outer} and {closed}"
        )));
    }
    Ok(())
}

/// Push a bracket context that inherits the current threshold.
pub fn open_bracket(stack: &mut IndentStack, bracket: Bracket, out: &mut Vec<Token>) {
    let threshold = stack.peek_threshold();
    stack.push(bracket.context(threshold));
    trace!(?bracket, threshold, "open bracket");
    out.push(Token::symbol(bracket.open_str()));
}

/// Close every block/statement context above the nearest bracket, then pop
/// that bracket if it matches.
pub fn close_bracket(
    stack: &mut IndentStack,
    bracket: Bracket,
    out: &mut Vec<Token>,
) -> Result<(), LayoutError> {
    loop {
        match stack.peek() {
            IndentContext::Block(_) => {
                stack.pop();
                out.push(Token::BlockClose);
            }
            IndentContext::Statement(_) => {
                stack.pop();
                out.push(Token::StmtClose);
            }
            IndentContext::Empty => {
                return Err(LayoutError::bracket(format!(
                    "unbalanced '{}'",
                    bracket.close_str()
                )));
            }
            top @ (IndentContext::Paren(_) | IndentContext::Square(_) | IndentContext::Brace(_)) => {
                if top.bracket() != Some(bracket) {
                    let open = top.bracket().map_or("?", Bracket::open_str);
                    return Err(LayoutError::bracket(format!(
                        "mismatched bracket: '{}' cannot close '{open}'",
                        bracket.close_str()
                    )));
                }
                stack.pop();
                trace!(?bracket, "close bracket");
                out.push(Token::symbol(bracket.close_str()));
                return Ok(());
            }
        }
    }
}

/// Open a block or statement whose first token sits at `first_col`
/// (`None` when end of input comes first).
///
/// The context is pushed only when `first_col` is strictly greater than the
/// enclosing threshold. Otherwise the construct is empty and its close token
/// follows the open token at once. Returns whether a context was pushed.
pub fn open_layout(
    stack: &mut IndentStack,
    opener: Opener,
    first_col: Option<u32>,
    out: &mut Vec<Token>,
) -> bool {
    let enclosing = stack.peek_threshold();
    let (open, close) = opener.tokens();
    out.push(open);
    match first_col {
        Some(col) if col > enclosing => {
            trace!(?opener, col, enclosing, "open layout context");
            stack.push(opener.context(col));
            true
        }
        _ => {
            trace!(?opener, ?first_col, enclosing, "empty layout context");
            out.push(close);
            false
        }
    }
}
