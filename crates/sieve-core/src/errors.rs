//! Cross-cutting error types for sieve.
//!
//! Parsing and decoding errors live in `sieve-parser`, configuration errors in
//! `sieve-config`; per-file batch failures are classified in `sieve-cli`.

use thiserror::Error;

/// Errors that can be raised by any sieve crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name any variant of a closed enumeration.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}
