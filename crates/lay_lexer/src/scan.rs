//! Leaf scanners.
//!
//! Each scanner looks at the start of `s` and returns what it matched, or
//! `None`. They are pure and know nothing about layout; the driver advances
//! the cursor by the returned length.
use lay_syntax::{
    is_hex_digit, is_ident_continue, is_ident_start, is_line_break, is_operator_char,
    is_regex_flag,
};

/// A delimited lexeme: `len` bytes consumed, `text` is the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delimited<'a> {
    pub len: usize,
    pub text: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegexMatch<'a> {
    pub len: usize,
    pub pattern: &'a str,
    pub flags: &'a str,
}

pub const RAW_DELIMITER: &str = "```";

fn take_while(s: &str, f: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !f(c))
        .map_or(s.len(), |(i, _)| i)
}

pub fn identifier(s: &str) -> Option<&str> {
    let first = s.chars().next().filter(|&c| is_ident_start(c))?;
    let len = first.len_utf8() + take_while(&s[first.len_utf8()..], is_ident_continue);
    Some(&s[..len])
}

/// Maximal run of operator characters.
pub fn operator(s: &str) -> Option<&str> {
    let len = take_while(s, is_operator_char);
    (len > 0).then(|| &s[..len])
}

pub fn punctuation(s: &str) -> Option<&str> {
    match s.chars().next()? {
        ',' | ';' => Some(&s[..1]),
        _ => None,
    }
}

/// Decimal digits with an optional fraction, or `0x` hex digits.
pub fn number(s: &str) -> Option<&str> {
    if s.starts_with("0x") || s.starts_with("0X") {
        let digits = take_while(&s[2..], is_hex_digit);
        if digits > 0 {
            return Some(&s[..2 + digits]);
        }
    }
    let int = take_while(s, |c| c.is_ascii_digit());
    if int == 0 {
        return None;
    }
    let mut len = int;
    if let Some(frac) = s[int..].strip_prefix('.') {
        let digits = take_while(frac, |c| c.is_ascii_digit());
        if digits > 0 {
            len += 1 + digits;
        }
    }
    Some(&s[..len])
}

/// `'…'` or `"…"`. A backslash and the printable character after it pass
/// through verbatim, so `\"` does not close a `"` literal. Any other control
/// character means no match.
pub fn quoted(s: &str) -> Option<Delimited<'_>> {
    let mut chars = s.char_indices();
    let (_, quote) = chars.next().filter(|&(_, c)| c == '"' || c == '\'')?;
    while let Some((i, c)) = chars.next() {
        if c == quote {
            return Some(Delimited {
                len: i + 1,
                text: &s[1..i],
            });
        }
        if c.is_control() {
            return None;
        }
        if c == '\\' {
            let (_, escaped) = chars.next()?;
            if escaped.is_control() {
                return None;
            }
        }
    }
    None
}

/// `/pattern/flags`. The pattern is a single line, does not start with a
/// space or `/`, and may contain `\/`.
pub fn regex(s: &str) -> Option<RegexMatch<'_>> {
    let body = s.strip_prefix('/')?;
    let first = body.chars().next()?;
    if first == ' ' || first == '/' {
        return None;
    }
    let mut chars = body.char_indices();
    let end = loop {
        let (i, c) = chars.next()?;
        if is_line_break(c) || c.is_control() {
            return None;
        }
        match c {
            '/' => break i,
            '\\' => {
                let (_, escaped) = chars.next()?;
                if escaped.is_control() {
                    return None;
                }
            }
            _ => {}
        }
    };
    let after = &body[end + 1..];
    let flags = &after[..take_while(after, is_regex_flag)];
    Some(RegexMatch {
        len: 1 + end + 1 + flags.len(),
        pattern: &body[..end],
        flags,
    })
}

/// Body between two raw delimiters, kept verbatim including line breaks.
pub fn raw(s: &str) -> Option<Delimited<'_>> {
    let body = s.strip_prefix(RAW_DELIMITER)?;
    let end = body.find(RAW_DELIMITER)?;
    Some(Delimited {
        len: RAW_DELIMITER.len() * 2 + end,
        text: &body[..end],
    })
}
