//! Parser error types for sieve-parser.
//!
//! Malformed markup is never an error: the HTML5 tree builder always yields a tree.
//! Only undecodable bytes and I/O at the edges surface here.

/// Errors that can occur while turning document bytes into a tree.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Decode failed: {reason}")]
    Decode { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
