// arg_utils.rs: small helpers shared by the argument parser and help text.

use std::ffi::OsStr;

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Resolves the name shown in the usage line from `argv[0]`.
///
/// Falls back to [`PROGRAM_NAME`](crate::cli::constants::PROGRAM_NAME) when
/// `argv[0]` is missing or ends in a separator.
pub fn exe_name_from_argv0(argv0: Option<&OsStr>) -> String {
    let name = argv0
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let last = last_name_from_path(&name);
    if last.is_empty() {
        crate::cli::constants::PROGRAM_NAME.to_owned()
    } else {
        last.to_owned()
    }
}

/// Classification of one raw command-line argument.
#[derive(Debug, PartialEq, Eq)]
pub enum ArgKind<'a> {
    /// `-` with nothing after it.
    BareDash,
    /// `--name`; the name is empty for a lone `--`, which the parser skips.
    Long(String),
    /// `-abc`; the characters after the dash.
    ShortCluster(Vec<char>),
    /// Anything not starting with `-`.
    Operand(&'a OsStr),
}

/// Splits an argument into its [`ArgKind`].
///
/// Only the option part is decoded as text (lossily); operands stay as
/// `OsStr` so non-UTF-8 file names survive.
pub fn classify(arg: &OsStr) -> ArgKind<'_> {
    let bytes = arg.as_encoded_bytes();
    match bytes {
        [b'-'] => ArgKind::BareDash,
        [b'-', b'-', ..] => {
            let text = arg.to_string_lossy();
            ArgKind::Long(text[2..].to_owned())
        }
        [b'-', ..] => {
            let text = arg.to_string_lossy();
            ArgKind::ShortCluster(text[1..].chars().collect())
        }
        _ => ArgKind::Operand(arg),
    }
}
