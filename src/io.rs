//! File I/O and the streaming codec engine.
//!
//! - [`file_io`]: opening the input file and the output sink.
//! - [`stream`]: the chunked read → transform → write loop.

pub mod file_io;
pub mod stream;

// ── Re-exports ────────────────────────────────────────────────────────────────
pub use file_io::{open_dst_file, open_src_file, Input, Output};
pub use stream::{code_stream, code_stream_with_chunk, CodecError};
