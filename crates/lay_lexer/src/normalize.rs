use std::borrow::Cow;

const BOM: char = '\u{FEFF}';

/// Strip a leading BOM and turn `\r\n` and lone `\r` into `\n`.
///
/// Borrows the input when there is nothing to change.
pub fn normalize_source(input: &str) -> Cow<'_, str> {
    let input = input.strip_prefix(BOM).unwrap_or(input);
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
