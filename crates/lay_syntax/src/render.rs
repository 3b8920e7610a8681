use crate::{Diagnostic, SourceFile};

pub fn render_diagnostic(source: &SourceFile, diag: &Diagnostic) -> String {
    let code_str = diag.code.map(|c| format!(" [{c}]")).unwrap_or_default();
    match diag.position {
        Some(pos) => {
            let mut out = format!(
                "{:?}{}:{}:{}: {}: {}",
                diag.severity, code_str, pos.line, pos.column, source.name, diag.message
            );
            let line_text = source.text.line_text(pos.line).unwrap_or("");
            out.push('\n');
            out.push_str("  | ");
            out.push_str(line_text);
            out.push('\n');
            out.push_str("  | ");
            out.extend(std::iter::repeat_n(' ', pos.indent() as usize));
            out.push('^');
            out
        }
        None => format!(
            "{:?}{}: {}: {}",
            diag.severity, code_str, source.name, diag.message
        ),
    }
}
