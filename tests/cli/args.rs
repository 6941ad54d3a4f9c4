// Integration tests for cli/args.rs through the public library API.
//
//   - RunConfig defaults
//   - handle ownership: parse failures drop every file opened so far
//   - non-UTF-8 file names (Linux)

use std::ffi::OsString;
use std::fs;
use std::io::Read;

use itch_save::cli::args::{parse_args_from, ArgError, RunConfig};
use tempfile::TempDir;

fn os(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[test]
fn run_config_defaults() {
    let cfg = RunConfig::new("isc");
    assert!(cfg.output.is_stdout());
    assert!(!cfg.show_help);
    assert!(!cfg.print_version);
    assert!(cfg.input.is_none());
    assert!(!cfg.exit_early());
}

#[test]
fn failure_after_opening_output_still_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.xml");
    let err = parse_args_from("isc", &os(&["-o", out.to_str().unwrap(), "-q"])).unwrap_err();
    assert!(matches!(err, ArgError::UnknownOption(ref o) if o == "q"));
    // The output was created before the failure; its handle is already closed,
    // so the file can be removed and recreated.
    assert!(out.exists());
    fs::remove_file(&out).unwrap();
    fs::write(&out, b"ok").unwrap();
}

#[test]
fn failure_after_opening_input_releases_it() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("save.dat");
    fs::write(&input, b"data").unwrap();
    let err = parse_args_from("isc", &os(&[input.to_str().unwrap(), "-"])).unwrap_err();
    assert!(matches!(err, ArgError::EmptyCluster { position: 2 }));
    fs::remove_file(&input).unwrap();
}

#[test]
fn input_is_readable_from_config() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("save.dat");
    fs::write(&input, b"\x01\x02").unwrap();
    let mut cfg = parse_args_from("isc", &os(&[input.to_str().unwrap()])).unwrap();
    let mut buf = Vec::new();
    cfg.input.as_mut().unwrap().read_to_end(&mut buf).unwrap();
    assert_eq!(buf, [1, 2]);
    assert_eq!(cfg.input.as_ref().unwrap().path(), input.as_path());
}

// Linux filesystems accept arbitrary bytes in names; macOS ones do not.
#[cfg(target_os = "linux")]
#[test]
fn non_utf8_input_name_is_opened_verbatim() {
    use std::os::unix::ffi::OsStringExt;

    let dir = TempDir::new().unwrap();
    let mut name = dir.path().as_os_str().to_owned().into_vec();
    name.extend_from_slice(b"/save-\xFF.dat");
    let name = OsString::from_vec(name);
    fs::write(&name, b"x").unwrap();

    let cfg = parse_args_from("isc", &[name]).unwrap();
    assert!(cfg.input.is_some());
}
