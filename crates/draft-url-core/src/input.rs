//! Reading deploy-log text from a stream.

use anyhow::{Context, Result};
use std::io::Read;

/// Read the whole stream into a string.
///
/// Invalid UTF-8 sequences become U+FFFD instead of failing the read; the URL line
/// is ASCII in practice and a stray byte elsewhere in the log should not hide it.
pub fn read_log_text<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .context("read log text from stdin")?;
    tracing::debug!(bytes = bytes.len(), "read log text");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[test]
    fn reads_all_lines() {
        let text = read_log_text(Cursor::new("a\nb\nc")).unwrap();
        assert_eq!(text, "a\nb\nc");
    }

    #[test]
    fn empty_stream_is_empty_text() {
        let text = read_log_text(Cursor::new(Vec::<u8>::new())).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let text = read_log_text(Cursor::new(b"ok \xff done".to_vec())).unwrap();
        assert_eq!(text, "ok \u{fffd} done");
    }

    #[test]
    fn io_error_carries_context() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            }
        }

        let err = read_log_text(Broken).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("read log text from stdin"), "{msg}");
        assert!(msg.contains("pipe closed"), "{msg}");
    }
}
