//! Prints the implementation guide for the historical events feature.
//!
//! Takes no arguments. Output goes to stdout and is identical on every
//! run; diagnostics (if enabled through `RUST_LOG`) go to stderr.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let status = guide::run(&mut out).await?;
    tracing::debug!(status, "guide finished");
    Ok(())
}
