#![allow(nonstandard_style)]

mod classifying;
mod error_handling;
mod evaluating;
mod parsing;
mod prompting;
mod scanning;
mod session;

use scanning::*;
use session::*;

use tracing_subscriber::{fmt, EnvFilter};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    setup_logging();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let scanner = StreamScanner::new(stdin.lock(), stdout.lock());

    if let Err(e) = Session::new(scanner).run() {
        tracing::error!(error = %e, "session aborted");
        eprintln!("Error, {}", e);
        std::process::exit(1);
    }
}
