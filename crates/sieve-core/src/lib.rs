//! # sieve-core
//!
//! Core types shared by every sieve crate.
//!
//! This crate owns the canonical shapes a document is reduced to:
//! - The text normaliser every emission rule runs its text through
//! - `OutputUnit`, the closed set of flat-mode line records, and their literal rendering
//! - `Record`, the nested structured-mode value, and its path-prefixed flattening
//! - Mode and empty-value policy enums used by configuration and the CLI
//! - Cross-cutting error types
//!
//! Nothing here knows about HTML parsing; `sieve-parser` produces these values.

pub mod enums;
pub mod errors;
pub mod record;
pub mod text;
pub mod units;

pub use enums::{EmptyPolicy, Mode, TextKind};
pub use errors::CoreError;
pub use record::{Record, RecordMap, flatten, flatten_to_text};
pub use units::{EMPTY, INLINE_SCRIPT, InputFields, NO_URL, OutputUnit, render_units};
