use std::path::PathBuf;

use clap::{Args, Subcommand};
use sieve_core::{EmptyPolicy, Mode};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Canonicalize every eligible file of a directory into another directory.
    Batch(BatchArgs),
    /// Canonicalize a single document and print it to stdout.
    Canon(CanonArgs),
}

/// Canonicalization settings shared by every command. Unset flags fall back
/// to the loaded configuration.
#[derive(Clone, Debug, Default, Args)]
pub struct CanonFlags {
    /// Canonicalization mode: flat, structured or text.
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Structured mode only: omit empty values or mark them with <EMPTY>.
    #[arg(long)]
    pub empty_policy: Option<EmptyPolicy>,

    /// Comma-separated elements removed with their subtrees. Pass the flag
    /// without values to strip nothing.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub strip_tags: Option<Vec<String>>,
}

#[derive(Clone, Debug, Args)]
pub struct BatchArgs {
    /// Directory holding the input documents.
    pub input_dir: PathBuf,

    /// Directory receiving one output file per input file.
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub canon: CanonFlags,

    /// Worker threads (0 = one per CPU).
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,

    /// Comma-separated input extensions to process.
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Extension of the written files.
    #[arg(long)]
    pub output_extension: Option<String>,

    /// Create the output directory if it does not exist.
    #[arg(long)]
    pub create_output: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CanonArgs {
    /// Document to canonicalize.
    pub file: PathBuf,

    #[command(flatten)]
    pub canon: CanonFlags,

    /// Print the structured record as JSON instead of flattened lines.
    /// Implies `--mode structured`.
    #[arg(long)]
    pub record_json: bool,
}
