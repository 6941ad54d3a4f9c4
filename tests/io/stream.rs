// Integration tests for io/stream.rs against real files.
//
//   - involution and length preservation on multi-chunk files
//   - identical output for chunk sizes 1, BUFFER_SIZE and whole-input
//   - bytes written before a write failure stay in the sink

use std::fs::{self, File};
use std::io::{self, Cursor, Write};

use itch_save::config::BUFFER_SIZE;
use itch_save::io::{open_dst_file, open_src_file};
use itch_save::{code_byte, code_stream, code_stream_with_chunk, CodecError};
use tempfile::TempDir;

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(7919) >> 3) as u8).collect()
}

fn code_file(src: &std::path::Path, dst: &std::path::Path, chunk: usize) -> u64 {
    let mut input = open_src_file(src).unwrap();
    let mut output = open_dst_file(dst).unwrap();
    code_stream_with_chunk(&mut input, &mut output, chunk).unwrap()
}

#[test]
fn file_involution_and_length() {
    let dir = TempDir::new().unwrap();
    let plain = dir.path().join("plain.xml");
    let coded = dir.path().join("coded.dat");
    let back = dir.path().join("back.xml");
    let data = sample(5 * BUFFER_SIZE + 123);
    fs::write(&plain, &data).unwrap();

    assert_eq!(code_file(&plain, &coded, BUFFER_SIZE), data.len() as u64);
    let coded_bytes = fs::read(&coded).unwrap();
    assert_eq!(coded_bytes.len(), data.len());
    assert!(coded_bytes.iter().zip(&data).all(|(c, p)| *c == code_byte(*p)));

    code_file(&coded, &back, BUFFER_SIZE);
    assert_eq!(fs::read(&back).unwrap(), data);
}

#[test]
fn chunk_size_does_not_change_output() {
    let dir = TempDir::new().unwrap();
    let plain = dir.path().join("plain.xml");
    let data = sample(2 * BUFFER_SIZE + 17);
    fs::write(&plain, &data).unwrap();

    let mut outputs = Vec::new();
    for (i, chunk) in [1, BUFFER_SIZE, data.len()].into_iter().enumerate() {
        let out = dir.path().join(format!("out{i}.dat"));
        code_file(&plain, &out, chunk);
        outputs.push(fs::read(&out).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

#[test]
fn exact_multiple_of_buffer_size() {
    let data = sample(3 * BUFFER_SIZE);
    let mut out = Vec::new();
    let n = code_stream(&mut Cursor::new(&data), &mut out).unwrap();
    assert_eq!(n, data.len() as u64);
    assert_eq!(out.len(), data.len());
}

/// A file sink that refuses everything after `limit` bytes.
struct DiskFull {
    file: File,
    written: usize,
    limit: usize,
}

impl Write for DiskFull {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written >= self.limit {
            return Err(io::Error::new(io::ErrorKind::Other, "No space left on device"));
        }
        let n = buf.len().min(self.limit - self.written);
        self.file.write_all(&buf[..n])?;
        self.written += n;
        Ok(n)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[test]
fn write_failure_keeps_flushed_bytes() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("partial.xml");
    let data = sample(3 * BUFFER_SIZE);
    let mut sink = DiskFull {
        file: File::create(&out_path).unwrap(),
        written: 0,
        limit: BUFFER_SIZE + 10,
    };

    let err = code_stream(&mut Cursor::new(&data), &mut sink).unwrap_err();
    assert!(matches!(err, CodecError::Write(_)));
    assert!(err.to_string().contains("No space left on device"));
    drop(sink);

    let partial = fs::read(&out_path).unwrap();
    assert_eq!(partial.len(), BUFFER_SIZE + 10);
    assert!(partial
        .iter()
        .zip(&data)
        .all(|(c, p)| *c == code_byte(*p)));
}
