//! combat-level - Interactive combat level calculator

mod session;

use clap::Parser;
use session::Session;
use std::ffi::OsString;
use std::io;
use tracing_subscriber::EnvFilter;

/// Compute a RuneScape character's combat level from its skill levels
#[derive(Parser, Debug)]
#[command(name = "combat-level")]
#[command(about = "Compute RS3 or OSRS combat levels from skill levels", version)]
struct Args {
    /// Log calculation details to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Parse arguments, reporting bad flags without a non-zero exit status
fn parse_args<I, T>(argv: I) -> Option<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Some(args),
        Err(err) => {
            // --help and --version also arrive here; print() routes them to stdout
            if let Err(io_err) = err.print() {
                eprintln!("failed to print usage: {}", io_err);
            }
            None
        }
    }
}

fn main() {
    let Some(args) = parse_args(std::env::args_os()) else {
        return;
    };

    // Logs go to stderr so prompts and results stay on stdout
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());

    // Failures are reported, never surfaced as a non-zero exit status
    if let Err(err) = session.run() {
        tracing::debug!(%err, "calculation aborted");
        if let Err(io_err) = session.report(&err) {
            tracing::error!(%io_err, "failed to write diagnostic");
        }
    }
}
