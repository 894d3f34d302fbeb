//! Chunked raw-byte file streaming over a single TCP connection.
//!
//! Opens a local file and forwards its contents to a remote endpoint in
//! bounded-size chunks until the file is exhausted. The payload is treated
//! as an opaque byte stream: no framing, no acknowledgments, no retries.
//! The receiving end delimits the stream however it sees fit (the typical
//! payload is a raw video elementary stream fed to an ingest server).
//!
//! Both the socket and the file handle are scoped to one [`FileStreamer::stream`]
//! call and released on every exit path, success or failure.

mod error;
mod streamer;

pub use error::StreamError;
pub use streamer::{FileStreamer, StreamSummary};

/// Default chunk size for each read/send cycle: 1 KiB.
///
/// A tuning knob, not a protocol constant. The receiver sees one contiguous
/// byte stream regardless of how it was chunked on the way out.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;
