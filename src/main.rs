//! Binary entry point for the `itch-save-coder` command-line tool.
//!
//! 1. [`parse_args`] turns argv into a [`RunConfig`](itch_save::cli::args::RunConfig),
//!    opening the input and output files.
//! 2. [`run`] prints help/version or streams the input through the codec and
//!    returns an exit code.
//!
//! The configuration is moved into `run` and dropped there, so every file is
//! closed before `std::process::exit` is reached.

use itch_save::cli::arg_utils::exe_name_from_argv0;
use itch_save::cli::args::parse_args;
use itch_save::cli::dispatch::run;
use itch_save::cli::help::print_bad_usage;

fn main() {
    let config = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            itch_save::display_error!("{}", e);
            let exe_name = exe_name_from_argv0(std::env::args_os().next().as_deref());
            print_bad_usage(&exe_name);
            std::process::exit(1);
        }
    };

    let exit_code = run(config);
    std::process::exit(exit_code);
}
