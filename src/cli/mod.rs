//! Command-line interface for the `itch-save-coder` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings and the `DISPLAY_LEVEL` global with its print macros. |
//! | [`help`]      | Usage and version text. |
//! | [`arg_utils`] | Argument classification and argv[0] handling. |
//! | [`args`]      | `RunConfig` and the argument-parsing state machine. |
//! | [`dispatch`]  | Runs help, version, or the codec and maps the outcome to an exit code. |
//!
//! Typical call sequence: `parse_args` → `dispatch::run` → `std::process::exit`.

pub mod constants;
pub mod help;
pub mod arg_utils;
pub mod args;
pub mod dispatch;
