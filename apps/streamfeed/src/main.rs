//! streamfeed entry point.

mod cli;

use clap::Parser;
use streamfeed_streamer::FileStreamer;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        file = %cli.file.display(),
        host = %cli.host,
        port = cli.port,
        "starting streamfeed"
    );

    let streamer = FileStreamer::new(cli.host, cli.port).with_chunk_size(cli.chunk_size);

    let rt = tokio::runtime::Runtime::new()?;
    let summary = rt.block_on(streamer.stream(&cli.file))?;

    tracing::info!(
        bytes = summary.bytes_sent,
        chunks = summary.chunks_sent,
        "transfer complete"
    );
    Ok(())
}
