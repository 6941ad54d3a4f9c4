// itch-save-coder: decoder/encoder for Itch! save files

pub mod config;
pub mod codec;
pub mod io;
pub mod cli;

// ── Version constants ────────────────────────────────────────────────────────
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use codec::{code_byte, code_in_place};
pub use io::stream::{code_stream, code_stream_with_chunk, CodecError};
