//! Post-parse dispatch: help, version, or the codec run.
//!
//! [`run`] consumes the [`RunConfig`], so the input file and any output file
//! it owns are closed when it returns, on every path. The working buffer
//! lives inside [`code_stream`] and is released there.

use anyhow::bail;

use crate::cli::args::{ArgError, RunConfig};
use crate::cli::help::{write_usage, write_version};
use crate::io::stream::{code_stream, CodecError};

/// Execute the operation selected by argument parsing.
///
/// Returns the process exit code (0 = success, 1 = error). The diagnostic
/// has already been printed to stderr when 1 is returned.
pub fn run(config: RunConfig) -> i32 {
    match execute(config) {
        Ok(()) => 0,
        Err(e) => {
            crate::display_error!("{}", e);
            1
        }
    }
}

fn execute(config: RunConfig) -> anyhow::Result<()> {
    let RunConfig {
        mut output,
        show_help,
        print_version,
        input,
        exe_name,
    } = config;

    // Help takes priority over version.
    if show_help {
        write_usage(&mut output, &exe_name).map_err(CodecError::Write)?;
        return Ok(());
    }
    if print_version {
        write_version(&mut output).map_err(CodecError::Write)?;
        return Ok(());
    }

    let Some(mut input) = input else {
        bail!(ArgError::NoInput);
    };

    if output.is_stdout() {
        crate::displaylevel!(4, "Using stdout for output\n");
    }
    let total = code_stream(&mut input, &mut output)?;
    crate::displaylevel!(
        4,
        "Coded {} bytes from '{}'\n",
        total,
        input.path().display()
    );
    Ok(())
}
