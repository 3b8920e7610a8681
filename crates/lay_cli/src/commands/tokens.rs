use std::io::Write;

use lay_driver::Driver;
use lay_syntax::PositionedToken;
use serde_json::json;

use crate::args::CliArgs;
use crate::commands::{emit_diagnostics, lex_single, print_timing};

pub(crate) fn run(args: &CliArgs, driver: &Driver) -> i32 {
    let lexed = match lex_single(args, driver) {
        Ok(v) => v,
        Err(code) => return code,
    };
    if args.timing {
        print_timing(&lexed);
    }

    // Tokens before a failure are still printed.
    let mut out = std::io::stdout().lock();
    for t in &lexed.tokens {
        let line = if args.json_out {
            token_json(t)
        } else {
            format!(
                "{}\t{}\t{}",
                t.pos,
                t.token.kind_name(),
                escape_visible(&t.token.to_string())
            )
        };
        if let Err(e) = writeln!(out, "{line}") {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                return 0;
            }
            eprintln!("stdout error: {e}");
            return 2;
        }
    }
    drop(out);

    emit_diagnostics(&lexed.source, &lexed.diagnostics, args.json_out);
    if lexed.has_errors() { 1 } else { 0 }
}

fn token_json(t: &PositionedToken) -> String {
    json!({
        "line": t.pos.line,
        "column": t.pos.column,
        "kind": t.token.kind_name(),
        "text": t.token.to_string(),
    })
    .to_string()
}

fn escape_visible(s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
