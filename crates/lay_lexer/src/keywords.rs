//! Reserved word and symbol tables.
use phf::{phf_map, phf_set};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WordClass {
    Keyword,
    /// Keyword that opens a layout block right after itself.
    Layout,
    Const,
}

pub(crate) static RESERVED_WORDS: phf::Map<&'static str, WordClass> = phf_map! {
    "module" => WordClass::Keyword,
    "import" => WordClass::Keyword,
    "as" => WordClass::Keyword,
    "let" => WordClass::Keyword,
    "in" => WordClass::Keyword,
    "case" => WordClass::Keyword,
    "if" => WordClass::Keyword,
    "then" => WordClass::Keyword,
    "else" => WordClass::Keyword,
    "data" => WordClass::Keyword,
    "type" => WordClass::Keyword,
    "class" => WordClass::Keyword,
    "instance" => WordClass::Keyword,
    "deriving" => WordClass::Keyword,
    "where" => WordClass::Layout,
    "of" => WordClass::Layout,
    "do" => WordClass::Layout,
    "true" => WordClass::Const,
    "false" => WordClass::Const,
    "null" => WordClass::Const,
};

pub(crate) static RESERVED_SYMBOLS: phf::Set<&'static str> = phf_set! {
    "=", "->", "<-", "=>", "::", "|", "\\", "..", "@", "~",
};

/// The symbol that may open a multi-line statement.
pub(crate) const ASSIGN: &str = "=";
