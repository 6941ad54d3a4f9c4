// cli/help.rs: Usage and version text.
//
// Functions:
//   write_usage    → usage text to any sink (the configured output for -h)
//   write_version  → one-line version banner
//   print_usage    → usage text to stderr
//   print_bad_usage → usage after an argument error, gated by display level

use std::io::{self, Write};

use crate::cli::constants::{display_level, GAME_NAME, PRETTY_NAME, PROGRAM_NAME};

/// Writes the usage text, naming `program` in the synopsis.
pub fn write_usage<W: Write + ?Sized>(out: &mut W, program: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} is a tool to decode and encode back save files for game {}",
        PRETTY_NAME, GAME_NAME
    )?;
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    writeln!(out, "    {} [OPTIONS]... [INPUT_FILE]", program)?;
    writeln!(out)?;
    writeln!(out, "OPTIONS are:")?;
    writeln!(out, "    -h    --help            Print this usage info to output")?;
    writeln!(out, "    -v    --version         Print program version info to output")?;
    writeln!(
        out,
        "    -o    --output <FILE>   Specify output file, console(stdout) by default"
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "    If neither 'help' or 'version' options are specified INPUT_FILE required"
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "INPUT_FILE - path to input file either save data or decoded xml data"
    )?;
    out.flush()
}

/// Writes the version banner, e.g. `Itch! Save Coder (itch-save-coder) v1.0.0`.
pub fn write_version<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} ({}) v{}",
        PRETTY_NAME,
        PROGRAM_NAME,
        crate::version_string()
    )?;
    out.flush()
}

/// Prints the usage text to stderr.
pub fn print_usage(program: &str) {
    // Nothing sensible can be done if stderr itself is gone.
    let _ = write_usage(&mut io::stderr().lock(), program);
}

/// Prints the usage text to stderr after an argument error.
pub fn print_bad_usage(program: &str) {
    if display_level() >= 1 {
        print_usage(program);
    }
}
