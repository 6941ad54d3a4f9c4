//! Streaming codec engine.
//!
//! Reads a bounded chunk from the source, transforms it in place, writes it
//! to the sink, and repeats until the source reports end-of-stream. Memory
//! use is the working buffer and nothing else, whatever the input size.
//!
//! Nothing is buffered across iterations: every chunk is fully written before
//! the next read. On failure the bytes already written stay in the sink.

use std::fmt;
use std::io::{self, Read, Write};

use crate::codec::code_in_place;
use crate::config::BUFFER_SIZE;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Failure of a codec run. Every variant is terminal for the run.
#[derive(Debug)]
pub enum CodecError {
    /// The working buffer could not be allocated.
    Allocation { size: usize },
    /// Reading the input failed mid-stream.
    Read(io::Error),
    /// Writing or flushing the output failed, including short writes.
    Write(io::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Allocation { size } => {
                write!(f, "Can't allocate working buffer with size {} bytes", size)
            }
            CodecError::Read(e) => write!(f, "reading from input file: {}", e),
            CodecError::Write(e) => write!(f, "writing to output file: {}", e),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Allocation { .. } => None,
            CodecError::Read(e) | CodecError::Write(e) => Some(e),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Working buffer
// ─────────────────────────────────────────────────────────────────────────────

/// Allocates a zeroed working buffer of exactly `size` bytes.
///
/// Uses fallible reservation so an out-of-memory condition is reported
/// instead of aborting. A zero-sized buffer could never make progress and is
/// refused the same way.
pub fn alloc_buffer(size: usize) -> Result<Vec<u8>, CodecError> {
    if size == 0 {
        return Err(CodecError::Allocation { size });
    }
    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| CodecError::Allocation { size })?;
    buf.resize(size, 0);
    Ok(buf)
}

// ─────────────────────────────────────────────────────────────────────────────
// Chunk reader
// ─────────────────────────────────────────────────────────────────────────────

/// Fills `buf` from `src` until it is full or the source is exhausted.
///
/// Returns the number of bytes placed in `buf` and whether end-of-stream was
/// reached. A short count is only ever returned together with `eof = true`.
/// `Interrupted` is retried; any other error aborts and the partially filled
/// chunk is discarded.
pub fn read_chunk<R: Read + ?Sized>(src: &mut R, buf: &mut [u8]) -> io::Result<(usize, bool)> {
    let mut filled = 0usize;
    while filled < buf.len() {
        match src.read(&mut buf[filled..]) {
            Ok(0) => return Ok((filled, true)),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok((filled, false))
}

// ─────────────────────────────────────────────────────────────────────────────
// Codec loop
// ─────────────────────────────────────────────────────────────────────────────

/// Streams `src` to `dst` through the codec with the default 16 KiB buffer.
///
/// Returns the number of bytes processed (equal for input and output).
pub fn code_stream<R, W>(src: &mut R, dst: &mut W) -> Result<u64, CodecError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    code_stream_with_chunk(src, dst, BUFFER_SIZE)
}

/// Streams `src` to `dst` through the codec using a `chunk_size`-byte buffer.
///
/// The output does not depend on `chunk_size`; only the number of read and
/// write calls does.
pub fn code_stream_with_chunk<R, W>(
    src: &mut R,
    dst: &mut W,
    chunk_size: usize,
) -> Result<u64, CodecError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = alloc_buffer(chunk_size)?;
    let mut total: u64 = 0;

    loop {
        let (n, eof) = read_chunk(src, &mut buf).map_err(CodecError::Read)?;

        let chunk = &mut buf[..n];
        code_in_place(chunk);
        // write_all reports a sink that stops accepting bytes as WriteZero.
        dst.write_all(chunk).map_err(CodecError::Write)?;
        total += n as u64;

        // End-of-stream is checked after the chunk is written.
        if eof {
            break;
        }
    }

    dst.flush().map_err(CodecError::Write)?;
    Ok(total)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
