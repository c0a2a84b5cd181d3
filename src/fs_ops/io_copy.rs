//! Streaming copy with a byte counter.
//!
//! Writes to a freshly created destination (`create_new`; never clobbers)
//! using large buffers, and returns the number of bytes that actually
//! crossed. The caller compares that count and the destination's stat length
//! against the source length; streaming keeps memory flat regardless of
//! file size.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024; // 1 MiB buffers

/// Copy `src` -> `dst`, returning the number of bytes written.
/// `dst` is created with `create_new(true)` so an existing file is an error,
/// not an overwrite.
pub(super) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn copy_small_file_ok() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        let data = b"hello world";
        fs::write(&src, data).unwrap();

        let n = copy_streaming(&src, &dst).unwrap();
        assert_eq!(n, data.len() as u64);
        assert_eq!(fs::read(&dst).unwrap(), data);
    }

    #[test]
    fn copy_zero_length_ok() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("empty");
        let dst = dir.path().join("out");
        File::create(&src).unwrap();

        let n = copy_streaming(&src, &dst).unwrap();
        assert_eq!(n, 0);
        assert_eq!(fs::metadata(&dst).unwrap().len(), 0);
    }

    #[test]
    fn fails_if_dest_exists() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::write(&src, b"data").unwrap();
        fs::write(&dst, b"x").unwrap();

        let err = copy_streaming(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn copy_crosses_buffer_boundaries() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("big.bin");
        let dst = dir.path().join("big.out");

        let size = 2 * BUF_SIZE + 123;
        let mut data = vec![0u8; size];
        for (i, b) in data.iter_mut().enumerate() {
            *b = (i % 251) as u8;
        }
        fs::write(&src, &data).unwrap();

        let n = copy_streaming(&src, &dst).unwrap();
        assert_eq!(n as usize, size);
        assert_eq!(fs::read(&dst).unwrap(), data);
    }
}
