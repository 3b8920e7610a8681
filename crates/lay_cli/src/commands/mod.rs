use lay_driver::LexedFile;
use lay_syntax::{Diagnostic, Severity, SourceFile, render_diagnostic};
use serde_json::json;

use crate::args::CliArgs;

pub(crate) mod check;
pub(crate) mod tokens;

/// Resolve the single `<file>` argument and lex it.
///
/// `Err` carries the exit code after the problem has been reported.
pub(crate) fn lex_single(args: &CliArgs, driver: &lay_driver::Driver) -> Result<LexedFile, i32> {
    let [path] = args.positional.as_slice() else {
        eprintln!("Missing <file>");
        return Err(2);
    };
    driver.lex_file(path).map_err(|e| {
        eprintln!("{e}");
        2
    })
}

pub(crate) fn emit_diagnostics(source: &SourceFile, diagnostics: &[Diagnostic], json_out: bool) {
    for d in diagnostics {
        if json_out {
            let obj = json!({
                "severity": match d.severity { Severity::Error => "error" },
                "code": d.code,
                "message": d.message,
                "line": d.position.map(|p| p.line),
                "column": d.position.map(|p| p.column),
                "file": source.name,
            });
            println!("{obj}");
        } else {
            eprintln!("{}", render_diagnostic(source, d));
        }
    }
}

pub(crate) fn print_timing(lexed: &LexedFile) {
    eprintln!(
        "TIMING normalize={:.3}ms lex={:.3}ms",
        (lexed.timings.normalize_us as f64) / 1000.0,
        (lexed.timings.lex_us as f64) / 1000.0,
    );
}
