// config.rs: Compile-time configuration constants.
//
// There is no runtime configuration: no config file and no environment
// variable. Everything tunable lives here.

// Size of the working buffer used by the streaming codec (16 KiB).
// Peak memory on the data path is bounded by this value regardless of the
// input size.
pub const BUFFER_SIZE: usize = 1 << 14;

// Key byte XOR-ed into every byte of an Itch! save file.
// XOR with a constant is its own inverse, so the same value decodes and
// encodes.
pub const XOR_KEY: u8 = 0x22;
