//! File handles owned by a run configuration.
//!
//! - [`open_src_file`] opens the save file (or previously decoded file) to
//!   read and rejects directories.
//! - [`open_dst_file`] creates or truncates the file named by `-o`.
//! - [`Output`] is the sink the codec writes to: standard output by default,
//!   or a file the configuration owns.
//!
//! Both handle types close themselves on drop, so whoever owns them releases
//! them exactly once on every exit path.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Source file
// ---------------------------------------------------------------------------

/// An input file opened for binary reading.
#[derive(Debug)]
pub struct Input {
    file: File,
    path: PathBuf,
}

impl Input {
    /// Path the input was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

/// Opens `path` for reading.
///
/// A directory is refused with [`io::ErrorKind::InvalidInput`] at open
/// time rather than surfacing later as a read error.
pub fn open_src_file(path: &Path) -> io::Result<Input> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "Is a directory"));
    }
    crate::displaylevel!(4, "Using '{}' for input\n", path.display());
    Ok(Input {
        file,
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Destination
// ---------------------------------------------------------------------------

/// Where coded bytes, usage text, and version text are written.
///
/// Only [`Output::File`] owns a handle; standard output is never closed.
#[derive(Debug)]
pub enum Output {
    Stdout(io::Stdout),
    File(File),
}

impl Output {
    /// Standard output, switched to binary mode where the platform has a
    /// text mode.
    pub fn stdout() -> Self {
        #[cfg(windows)]
        // SAFETY: calling _setmode on stdout (fd=1) is always valid.
        unsafe {
            libc::_setmode(1, libc::O_BINARY);
        }
        Output::Stdout(io::stdout())
    }

    /// `true` for the default standard-output sink.
    pub fn is_stdout(&self) -> bool {
        matches!(self, Output::Stdout(_))
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::stdout()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(out) => out.write(buf),
            Output::File(f) => f.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.lock().write_all(buf),
            Output::File(f) => f.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.flush(),
            Output::File(f) => f.flush(),
        }
    }
}

/// Creates (or truncates) `path` for binary writing.
pub fn open_dst_file(path: &Path) -> io::Result<Output> {
    let file = File::create(path)?;
    crate::displaylevel!(4, "Using '{}' for output\n", path.display());
    Ok(Output::File(file))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
