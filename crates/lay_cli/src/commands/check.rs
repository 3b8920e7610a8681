use lay_driver::Driver;

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
    emit_diagnostics(&lexed.source, &lexed.diagnostics, args.json_out);
    if lexed.has_errors() {
        return 1;
    }
    if !args.json_out {
        println!("ok: {} tokens", lexed.tokens.len());
    }
    0
}
