//! Command-line argument parsing for the streamfeed client.

use std::path::PathBuf;

use clap::Parser;
use streamfeed_streamer::DEFAULT_CHUNK_SIZE;

/// streamfeed - push a file's raw bytes to a TCP ingest endpoint.
#[derive(Debug, Parser)]
#[command(
    name = "streamfeed",
    version,
    about = "Push a file's raw bytes to a TCP ingest endpoint"
)]
pub struct Cli {
    /// File to stream (sent verbatim, no framing)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Remote host (IP address or DNS name)
    #[arg(short = 'H', long = "host", default_value = "127.0.0.1")]
    pub host: String,

    /// Remote TCP port
    #[arg(short = 'p', long = "port")]
    pub port: u16,

    /// Bytes per read/send cycle (0 = default)
    #[arg(long = "chunk-size", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["streamfeed", "video.h264", "--port", "6969"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("video.h264"));
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 6969);
        assert_eq!(cli.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn parses_full_invocation() {
        let cli = Cli::try_parse_from([
            "streamfeed",
            "data/test_stream.h264",
            "--host",
            "ingest.example",
            "--port",
            "8000",
            "--chunk-size",
            "4096",
        ])
        .unwrap();
        assert_eq!(cli.host, "ingest.example");
        assert_eq!(cli.port, 8000);
        assert_eq!(cli.chunk_size, 4096);
    }

    #[test]
    fn port_is_required() {
        assert!(Cli::try_parse_from(["streamfeed", "video.h264"]).is_err());
    }

    #[test]
    fn file_is_required() {
        assert!(Cli::try_parse_from(["streamfeed", "--port", "6969"]).is_err());
    }
}
