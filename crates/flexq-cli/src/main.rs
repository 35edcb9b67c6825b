mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{CompileParams, DumpParams, PrintParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            init_tracing(params.verbose);
            commands::dump::run(params.into());
        }
        Some(("print", m)) => {
            let params = PrintParams::from_matches(m);
            init_tracing(params.verbose);
            commands::print::run(params.into());
        }
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            init_tracing(params.verbose);
            commands::compile::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `-v` flags override `RUST_LOG`; without either only warnings are shown.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
