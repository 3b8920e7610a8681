//! Character classes shared by the scanners.

pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '%' | '&' | '*' | '+' | '-' | '.' | '/' | '<' | '=' | '>' | '?' | '@' | '\\'
            | '^' | '|' | '~' | ':'
    )
}

pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

pub fn is_regex_flag(c: char) -> bool {
    matches!(c, 'g' | 'i' | 'm' | 's' | 'u' | 'y')
}

/// Horizontal inter-token spacing.
pub fn is_inline_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}
