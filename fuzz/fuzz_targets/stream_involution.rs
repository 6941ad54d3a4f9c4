#![no_main]
use libfuzzer_sys::fuzz_target;

use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // First byte picks the chunk size so chunk boundaries land everywhere.
    let (chunk, payload) = match data.split_first() {
        Some((&c, rest)) => (usize::from(c) + 1, rest),
        None => return,
    };

    let mut coded = Vec::new();
    let n = itch_save::code_stream_with_chunk(&mut Cursor::new(payload), &mut coded, chunk)
        .expect("in-memory streams cannot fail");
    assert_eq!(n as usize, payload.len());
    assert_eq!(coded.len(), payload.len());

    // Same bytes as coding the whole payload in one go.
    assert_eq!(coded, itch_save::codec::code_to_vec(payload));

    let mut back = Vec::new();
    itch_save::code_stream(&mut Cursor::new(&coded), &mut back)
        .expect("in-memory streams cannot fail");
    assert_eq!(back, payload, "codec is not an involution for {} bytes", payload.len());
});
