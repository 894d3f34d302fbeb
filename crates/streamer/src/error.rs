//! Error types for the streamer.

use std::io;
use std::path::PathBuf;

/// Errors produced while streaming a file to a remote endpoint.
///
/// Each variant names the phase that failed. Whatever prefix of the file
/// was already handed to the transport stays sent; there is no rollback.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The source file could not be opened, inspected, or read.
    #[error("cannot read source file {path}: {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source path exists but is not a regular file.
    #[error("not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// No TCP connection could be established to the remote endpoint.
    #[error("cannot connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: io::Error,
    },

    /// An established connection failed while sending.
    ///
    /// `bytes_sent` counts the bytes already accepted by the transport.
    #[error("transfer failed after {bytes_sent} bytes: {source}")]
    Transfer {
        bytes_sent: u64,
        #[source]
        source: io::Error,
    },
}
