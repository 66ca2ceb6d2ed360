//! Reading content from files and stdin.
//!
//! Content is read as raw bytes and decoded leniently: invalid UTF-8 is
//! replaced with U+FFFD rather than rejected, so any input can be analyzed.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::{PostmetricError, Result};

/// Decodes bytes as UTF-8, replacing invalid sequences.
///
/// # Example
///
/// ```rust
/// use postmetric_core::input::decode_content;
///
/// assert_eq!(decode_content(b"plain"), "plain");
/// assert_eq!(decode_content(b"bad \xFF byte"), "bad \u{FFFD} byte");
/// ```
pub fn decode_content(bytes: &[u8]) -> Cow<'_, str> {
    let decoded = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = decoded {
        tracing::warn!(bytes = bytes.len(), "input is not valid UTF-8, invalid sequences were replaced");
    }
    decoded
}

/// Reads content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PostmetricError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    Ok(decode_content(&bytes).into_owned())
}

/// Reads content from standard input until EOF.
pub fn read_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    Ok(decode_content(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_valid_utf8_borrows() {
        assert!(matches!(decode_content("héllo".as_bytes()), Cow::Borrowed("héllo")));
    }

    #[test]
    fn test_decode_invalid_utf8_replaces() {
        let decoded = decode_content(&[b'a', 0xC3, b'b']);
        assert_eq!(decoded, "a\u{FFFD}b");
    }

    #[test]
    fn test_read_file_not_found() {
        let result = read_file("/nonexistent/path/post.html");
        assert!(matches!(result, Err(PostmetricError::FileNotFound(_))));
    }

    #[test]
    fn test_read_file_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_file(dir.path());
        assert!(matches!(result, Err(PostmetricError::ReadError(_))));
    }

    #[test]
    fn test_read_file_lossy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<p>caf\xE9</p>").unwrap();

        let content = read_file(file.path()).unwrap();
        assert_eq!(content, "<p>caf\u{FFFD}</p>");
    }
}
