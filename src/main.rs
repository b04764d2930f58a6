//! Newb syntax checker CLI entry point

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = newb::cli::Cli::parse();

    // Structured logging to stderr; `--trace` overrides RUST_LOG with rule-level parser tracing
    let filter = if cli.trace {
        EnvFilter::new("warn,newb_syntax=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    // Diagnostics show one line of context around the offending lexeme
    let _ = miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().context_lines(1).build())
    }));

    newb::cli::run(cli);
}
