use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser)]
/// Prints Fibonacci numbers for a range of indices.
struct Opts {
    /// number of indices to print, starting at 0
    #[arg(long, default_value_t = 10)]
    count: i64,
}

fn main() -> anyhow::Result<()> {
    // logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opts = Opts::parse();
    info!("printing fibonacci numbers for {} indices", opts.count);

    // line-buffered, so each result is flushed as soon as it is written
    let mut out = io::stdout().lock();
    report::run(&mut out, opts.count)?;

    Ok(())
}
