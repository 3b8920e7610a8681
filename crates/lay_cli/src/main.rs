mod args;
mod commands;

use lay_driver::Driver;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();

    let args = match args::parse_args(std::env::args().skip(1)) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let driver = Driver::new();
    let code = match args.cmd.as_str() {
        "tokens" => commands::tokens::run(&args, &driver),
        "check" => commands::check::run(&args, &driver),
        _ => {
            eprintln!("Unknown command: {}", args.cmd);
            eprintln!("{}", args::usage());
            2
        }
    };
    std::process::exit(code);
}
