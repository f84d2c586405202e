//! Byte decoding.
//!
//! Documents arrive as bytes. UTF-8 is tried first, then Latin-1; the Latin-1
//! fallback refuses bytes that would decode to control characters other than
//! tab, LF, FF and CR, which is how binary files end up as decode failures.

use std::fmt;
use std::path::Path;

use crate::error::ParserError;

/// Which encoding produced the decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Latin1,
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: SourceEncoding,
}

/// Decode document bytes, UTF-8 first, Latin-1 second.
///
/// A leading UTF-8 byte-order mark is dropped.
///
/// # Errors
/// Returns `ParserError::Decode` when the bytes are neither valid UTF-8 nor
/// control-free Latin-1.
pub fn decode_bytes(bytes: &[u8]) -> Result<Decoded, ParserError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(Decoded {
            text: text.strip_prefix('\u{feff}').unwrap_or(text).to_string(),
            encoding: SourceEncoding::Utf8,
        }),
        Err(utf8_error) => {
            if let Some(offset) = bytes.iter().position(|&b| is_disallowed_control(b)) {
                return Err(ParserError::Decode {
                    reason: format!(
                        "invalid UTF-8 ({utf8_error}) and control byte 0x{:02X} at offset {offset} rules out Latin-1",
                        bytes[offset]
                    ),
                });
            }
            Ok(Decoded {
                text: bytes.iter().map(|&b| char::from(b)).collect(),
                encoding: SourceEncoding::Latin1,
            })
        }
    }
}

/// Read a file and decode it with [`decode_bytes`].
///
/// # Errors
/// Returns `ParserError::Io` when the file cannot be read and
/// `ParserError::Decode` when its bytes cannot be decoded.
pub fn read_document(path: &Path) -> Result<Decoded, ParserError> {
    let bytes = std::fs::read(path)?;
    decode_bytes(&bytes)
}

const fn is_disallowed_control(byte: u8) -> bool {
    matches!(byte, 0x00..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F..=0x9F)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn utf8_is_preferred() {
        let decoded = decode_bytes("café".as_bytes()).unwrap();
        assert_eq!(decoded.text, "café");
        assert_eq!(decoded.encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn bom_is_dropped() {
        let decoded = decode_bytes(b"\xEF\xBB\xBF<p>x</p>").unwrap();
        assert_eq!(decoded.text, "<p>x</p>");
    }

    #[test]
    fn latin1_fallback_for_invalid_utf8() {
        let decoded = decode_bytes(b"<p>caf\xE9</p>").unwrap();
        assert_eq!(decoded.text, "<p>café</p>");
        assert_eq!(decoded.encoding, SourceEncoding::Latin1);
    }

    #[test]
    fn binary_bytes_are_undecodable() {
        let err = decode_bytes(b"\x89PNG\r\n\x1a\n\x00\x00\xff\xfe").unwrap_err();
        assert!(matches!(err, ParserError::Decode { .. }), "got: {err}");
    }

    #[test]
    fn control_bytes_in_valid_utf8_are_kept() {
        assert!(decode_bytes(b"a\x00b").is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_document(Path::new("/definitely/not/here.html")).unwrap_err();
        assert!(matches!(err, ParserError::Io(_)), "got: {err}");
    }
}
