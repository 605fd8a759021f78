mod account;
mod error;
mod input;
mod shell;
mod store;

use clap::Parser;
use shell::Shell;
use tracing_subscriber::EnvFilter;

/// Keeps a handful of bank accounts in memory for one session.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Log filter used when RUST_LOG is not set. Logs go to stderr.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write every account as CSV to stdout when the session ends
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<(), std::io::Error> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run()?;

    if args.summary {
        let (store, output) = shell.into_parts();
        store.write_summary(output)?;
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
