//! Command-line argument parsing for `itch-save-coder`.
//!
//! The entry points are [`parse_args`] (reads `std::env::args_os()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both produce a [`RunConfig`] that owns every file handle opened while
//! parsing.
//!
//! Short options may be aggregated (`-hv`). `-o` takes its filename from the
//! *next argument*, never from the rest of its own cluster, and ends the
//! cluster: in `-oh out.xml` the `h` is not looked at. Long options are
//! `--help`, `--version` and `--output FILE`; there is no `--opt=VALUE` form.
//! A lone `--` is accepted and ignored; later arguments are parsed as usual.
//! Every argument that does not start with `-` names the input file.
//!
//! On error the partially built configuration is dropped, which closes any
//! file opened before the failing argument.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::cli::arg_utils::{classify, exe_name_from_argv0, ArgKind};
use crate::io::file_io::{open_dst_file, open_src_file, Input, Output};

// ── Public output type ─────────────────────────────────────────────────────────

/// Resolved run configuration consumed by [`crate::cli::dispatch::run`].
#[derive(Debug)]
pub struct RunConfig {
    /// Sink for coded bytes and for help/version text.
    pub output: Output,
    /// `-h` / `--help` was given.
    pub show_help: bool,
    /// `-v` / `--version` was given.
    pub print_version: bool,
    /// Input file; always `Some` unless help or version was requested.
    pub input: Option<Input>,
    /// Program name (argv[0] basename), used by the usage text.
    pub exe_name: String,
}

impl RunConfig {
    /// Default configuration: stdout output, no flags, no input.
    pub fn new(exe_name: &str) -> Self {
        RunConfig {
            output: Output::default(),
            show_help: false,
            print_version: false,
            input: None,
            exe_name: exe_name.to_owned(),
        }
    }

    /// `true` when the run prints help or version instead of coding.
    pub fn exit_early(&self) -> bool {
        self.show_help || self.print_version
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Argument-parsing failure. The display text is the diagnostic shown to the
/// user after the `ERROR: ` prefix.
#[derive(Debug)]
pub enum ArgError {
    /// Unrecognised short character or long option name.
    UnknownOption(String),
    /// `-o` / `--output` at the end of the argument list; holds the spelling used.
    MissingFilename(&'static str),
    /// A second `-o`.
    MultipleOutputs,
    /// A second input filename.
    MultipleInputs,
    /// A lone `-`; holds the 1-based argument position.
    EmptyCluster { position: usize },
    /// No input file and neither help nor version requested.
    NoInput,
    /// The input file could not be opened.
    OpenRead { path: PathBuf, source: io::Error },
    /// The output file could not be created.
    OpenWrite { path: PathBuf, source: io::Error },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::UnknownOption(name) => write!(f, "Unknown option '{}'", name),
            ArgError::MissingFilename(option) => {
                write!(f, "option '{}' expects filename after it", option)
            }
            ArgError::MultipleOutputs => f.write_str("Multiple output files not allowed"),
            ArgError::MultipleInputs => f.write_str("Multiple input files not allowed"),
            ArgError::EmptyCluster { position } => write!(
                f,
                "After '-' in argument {} expected short option or '-'",
                position
            ),
            ArgError::NoInput => f.write_str("No input file specified"),
            ArgError::OpenRead { path, source } => write!(
                f,
                "Can't open file '{}' for read: {}",
                path.display(),
                source
            ),
            ArgError::OpenWrite { path, source } => write!(
                f,
                "Can't open file '{}' for write: {}",
                path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for ArgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgError::OpenRead { source, .. } | ArgError::OpenWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliOption {
    Help,
    Version,
    Output,
}

impl CliOption {
    fn from_short(c: char) -> Option<Self> {
        match c {
            'h' => Some(CliOption::Help),
            'v' => Some(CliOption::Version),
            'o' => Some(CliOption::Output),
            _ => None,
        }
    }

    fn from_long(name: &str) -> Option<Self> {
        match name {
            "help" => Some(CliOption::Help),
            "version" => Some(CliOption::Version),
            "output" => Some(CliOption::Output),
            _ => None,
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            CliOption::Help => "h",
            CliOption::Version => "v",
            CliOption::Output => "o",
        }
    }

    fn long_name(self) -> &'static str {
        match self {
            CliOption::Help => "help",
            CliOption::Version => "version",
            CliOption::Output => "output",
        }
    }

    /// Options that consume the next argument, ending their cluster.
    fn takes_value(self) -> bool {
        matches!(self, CliOption::Output)
    }
}

/// Scan state within one short-option cluster.
enum ClusterState {
    /// Next character to look at.
    Scanning(usize),
    Done,
}

// ── Parser ────────────────────────────────────────────────────────────────────

struct Parser<'a> {
    argv: &'a [OsString],
    /// Index of the argument being processed.
    cursor: usize,
    config: RunConfig,
}

impl<'a> Parser<'a> {
    fn new(exe_name: &str, argv: &'a [OsString]) -> Self {
        Parser {
            argv,
            cursor: 0,
            config: RunConfig::new(exe_name),
        }
    }

    fn run(mut self) -> Result<RunConfig, ArgError> {
        let argv = self.argv;
        while self.cursor < argv.len() {
            match classify(&argv[self.cursor]) {
                ArgKind::BareDash => {
                    return Err(ArgError::EmptyCluster {
                        position: self.cursor + 1,
                    });
                }
                // A lone `--` names no option and is skipped.
                ArgKind::Long(name) if name.is_empty() => {}
                ArgKind::Long(name) => {
                    let option =
                        CliOption::from_long(&name).ok_or(ArgError::UnknownOption(name))?;
                    self.apply(option, option.long_name())?;
                }
                ArgKind::ShortCluster(chars) => self.scan_cluster(&chars)?,
                ArgKind::Operand(path) => self.set_input(Path::new(path))?,
            }
            self.cursor += 1;
        }

        if !self.config.exit_early() && self.config.input.is_none() {
            return Err(ArgError::NoInput);
        }
        Ok(self.config)
    }

    fn scan_cluster(&mut self, chars: &[char]) -> Result<(), ArgError> {
        let mut state = ClusterState::Scanning(0);
        while let ClusterState::Scanning(pos) = state {
            state = match chars.get(pos) {
                None => ClusterState::Done,
                Some(&c) => {
                    let option = CliOption::from_short(c)
                        .ok_or_else(|| ArgError::UnknownOption(c.to_string()))?;
                    self.apply(option, option.short_name())?;
                    if option.takes_value() {
                        ClusterState::Done
                    } else {
                        ClusterState::Scanning(pos + 1)
                    }
                }
            };
        }
        Ok(())
    }

    /// `spelling` is how the user wrote the option, for diagnostics.
    fn apply(&mut self, option: CliOption, spelling: &'static str) -> Result<(), ArgError> {
        match option {
            CliOption::Help => self.config.show_help = true,
            CliOption::Version => self.config.print_version = true,
            CliOption::Output => {
                if !self.config.output.is_stdout() {
                    return Err(ArgError::MultipleOutputs);
                }
                let argv = self.argv;
                self.cursor += 1;
                let name = argv
                    .get(self.cursor)
                    .ok_or(ArgError::MissingFilename(spelling))?;
                let path = Path::new(name);
                self.config.output = open_dst_file(path).map_err(|source| ArgError::OpenWrite {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    fn set_input(&mut self, path: &Path) -> Result<(), ArgError> {
        if self.config.input.is_some() {
            return Err(ArgError::MultipleInputs);
        }
        let input = open_src_file(path).map_err(|source| ArgError::OpenRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.config.input = Some(input);
        Ok(())
    }
}

// ── Public API ─────────────────────────────────────────────────────────────────

/// Parse `std::env::args_os()` (skipping argv[0]).
pub fn parse_args() -> anyhow::Result<RunConfig> {
    let mut args = std::env::args_os();
    let exe_name = exe_name_from_argv0(args.next().as_deref());
    let argv: Vec<OsString> = args.collect();
    Ok(parse_args_from(&exe_name, &argv)?)
}

/// Parse an explicit argument list.
///
/// `exe_name` is the name shown in usage text. `argv` is argv[1..].
pub fn parse_args_from(exe_name: &str, argv: &[OsString]) -> Result<RunConfig, ArgError> {
    Parser::new(exe_name, argv).run()
}
