//! Byte-level save-file transform.
//!
//! Itch! obfuscates its save data by XOR-ing every byte with a single
//! constant ([`XOR_KEY`]). The operation is an involution: applying it twice
//! yields the original byte, so there is no separate encoder and decoder.
//!
//! Everything here is stateless per byte, which is what lets the streaming
//! layer cut the input into chunks of any size.

use crate::config::XOR_KEY;

/// Transforms a single byte.
#[inline]
pub fn code_byte(b: u8) -> u8 {
    b ^ XOR_KEY
}

/// Transforms every byte of `buf` in place.
#[inline]
pub fn code_in_place(buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b = code_byte(*b);
    }
}

/// Returns a transformed copy of `src`.
pub fn code_to_vec(src: &[u8]) -> Vec<u8> {
    src.iter().copied().map(code_byte).collect()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
