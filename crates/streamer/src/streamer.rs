//! Sequential chunked transfer of one file over one TCP connection.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info, trace};

use crate::DEFAULT_CHUNK_SIZE;
use crate::error::StreamError;

/// Summary of a completed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    /// Total bytes handed to the transport.
    pub bytes_sent: u64,
    /// Number of chunks written (`ceil(bytes_sent / chunk_size)`).
    pub chunks_sent: u64,
}

/// Streams a local file's raw bytes to a TCP endpoint in bounded chunks.
///
/// One instance describes one remote endpoint. Each [`stream`](Self::stream)
/// call is an independent transfer: it opens its own connection and file
/// handle and releases both before returning, so calls may be repeated or
/// run from separate tasks against distinct files.
pub struct FileStreamer {
    host: String,
    port: u16,
    chunk_size: usize,
}

impl FileStreamer {
    /// Creates a streamer for `host:port` with the default chunk size.
    ///
    /// Name resolution is left to the transport at connect time, so `host`
    /// may be an IP address or a DNS name.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Overrides the chunk size for each read/send cycle.
    ///
    /// A chunk size of 0 falls back to [`DEFAULT_CHUNK_SIZE`].
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = if chunk_size == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            chunk_size
        };
        self
    }

    /// Returns the chunk size in effect.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the remote endpoint as `host:port`.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Streams the entire file at `path` to the remote endpoint.
    ///
    /// Reads the file in chunks of at most the configured chunk size and
    /// writes each chunk fully to the socket before reading the next. On
    /// success every byte of the file has been accepted by the transport in
    /// file order; a zero-length file opens and closes the connection
    /// without sending anything.
    ///
    /// The connection and the file handle are released on every exit path.
    pub async fn stream(&self, path: impl AsRef<Path>) -> Result<StreamSummary, StreamError> {
        let path = path.as_ref();
        let mut file = open_source(path).await?;

        let endpoint = self.endpoint();
        let mut conn = TcpStream::connect((self.host.as_str(), self.port))
            .await
            .map_err(|source| StreamError::Connect {
                endpoint: endpoint.clone(),
                source,
            })?;
        debug!(endpoint = %endpoint, path = %path.display(), "connected");

        let result = self.pump(path, &mut file, &mut conn).await;

        // Half-close so the receiver observes EOF; the socket and file
        // handle close on drop regardless of how the loop exited.
        let shutdown = conn.shutdown().await;

        let summary = result?;
        shutdown.map_err(|source| StreamError::Transfer {
            bytes_sent: summary.bytes_sent,
            source,
        })?;

        info!(
            endpoint = %endpoint,
            path = %path.display(),
            bytes = summary.bytes_sent,
            chunks = summary.chunks_sent,
            "file streamed"
        );
        Ok(summary)
    }

    /// Read/send loop with a single reused chunk buffer.
    async fn pump(
        &self,
        path: &Path,
        file: &mut File,
        conn: &mut TcpStream,
    ) -> Result<StreamSummary, StreamError> {
        let mut buf = vec![0u8; self.chunk_size];
        let mut bytes_sent: u64 = 0;
        let mut chunks_sent: u64 = 0;

        loop {
            let n = file
                .read(&mut buf)
                .await
                .map_err(|source| StreamError::Resource {
                    path: path.to_path_buf(),
                    source,
                })?;
            if n == 0 {
                break;
            }

            conn.write_all(&buf[..n])
                .await
                .map_err(|source| StreamError::Transfer { bytes_sent, source })?;

            bytes_sent += n as u64;
            chunks_sent += 1;
            trace!(chunk = chunks_sent, len = n, "chunk sent");
        }

        Ok(StreamSummary {
            bytes_sent,
            chunks_sent,
        })
    }
}

/// Opens `path` for reading and verifies it is a regular file.
///
/// The file is validated before any connection attempt, so a bad path never
/// produces network traffic.
async fn open_source(path: &Path) -> Result<File, StreamError> {
    let file = File::open(path)
        .await
        .map_err(|source| StreamError::Resource {
            path: path.to_path_buf(),
            source,
        })?;

    let metadata = file
        .metadata()
        .await
        .map_err(|source| StreamError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
    if !metadata.is_file() {
        return Err(StreamError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(file)
}
