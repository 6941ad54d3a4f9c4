// cli/constants.rs: Program identity strings and the display-level global.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity constants ────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "itch-save-coder";
pub const PRETTY_NAME: &str = "Itch! Save Coder";
pub const GAME_NAME: &str = "Itch!";

/// Prefix of every diagnostic printed to stderr.
pub const ERROR_PREFIX: &str = "ERROR: ";

// ── Display level global ──────────────────────────────────────────────────────
//
// Process-wide verbosity shared by every module that prints to stderr.
//
// 0 = no output; 1 = errors only; 2 = normal (default); 3 = more; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
//   displaylevel!(l, ...) → stderr when display_level() >= l
//   display_error!(...)   → `ERROR: ` line at level 1

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print an `ERROR: ` diagnostic line at display level 1.
#[macro_export]
macro_rules! display_error {
    ($($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= 1 {
            eprint!("{}", $crate::cli::constants::ERROR_PREFIX);
            eprintln!($($arg)*);
        }
    };
}
