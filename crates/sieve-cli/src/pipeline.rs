//! Batch pipeline: list → decode → canonicalize → write.
//!
//! Every eligible file of the input directory is processed independently on
//! a fixed-size rayon pool and written to `<stem>.<output_extension>` in the
//! output directory. A file that cannot be read, decoded or written is
//! recorded as skipped; the batch carries on. Only a missing input directory,
//! a missing output directory (unless creation is allowed) or a pool that
//! cannot be built stop the run, and they do so before any file is touched.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;
use serde::Serialize;
use sieve_config::BatchConfig;
use sieve_core::Mode;
use sieve_parser::{CanonOptions, ParserError, canonicalize, read_document};

use crate::progress::Progress;

/// Why a single file was skipped.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "{} maps to {}, which {} already produces",
        path.display(),
        output.display(),
        winner.display()
    )]
    OutputCollision {
        path: PathBuf,
        output: PathBuf,
        winner: PathBuf,
    },
}

impl FileError {
    fn from_parser(path: &Path, error: ParserError) -> Self {
        match error {
            ParserError::Io(source) => Self::Read {
                path: path.to_path_buf(),
                source,
            },
            ParserError::Decode { reason } => Self::Decode {
                path: path.to_path_buf(),
                reason,
            },
        }
    }
}

/// Everything one batch run needs.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub options: CanonOptions,
    /// The `[batch]` settings with command-line overrides applied.
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Summary printed after a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub input_dir: String,
    pub output_dir: String,
    pub mode: Mode,
    pub processed: usize,
    pub skipped: Vec<SkippedFile>,
}

impl BatchPlan {
    /// Run the batch.
    ///
    /// # Errors
    /// Fails before processing starts when a directory is missing or the
    /// worker pool cannot be built. Per-file failures end up in
    /// [`BatchReport::skipped`] instead.
    pub fn run(&self, progress_label: &str) -> anyhow::Result<BatchReport> {
        self.check_directories()?;

        let inputs = self.eligible_files()?;
        let (jobs, collisions) = self.assign_outputs(inputs);
        tracing::info!(
            files = jobs.len(),
            input_dir = %self.input_dir.display(),
            mode = %self.options.mode,
            "starting batch"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.batch.workers)
            .build()
            .context("failed to build worker pool")?;

        let progress = Progress::bar(jobs.len() as u64, progress_label);
        let outcomes: Vec<Result<PathBuf, FileError>> = pool.install(|| {
            jobs.par_iter()
                .map(|(input, output)| {
                    let outcome = self.process_file(input, output);
                    progress.inc(1);
                    outcome
                })
                .collect()
        });

        let mut processed = 0;
        let mut skipped = Vec::new();
        for outcome in collisions.into_iter().map(Err).chain(outcomes) {
            match outcome {
                Ok(_) => processed += 1,
                Err(error) => {
                    let path = skipped_path(&error);
                    tracing::warn!(path = %path.display(), %error, "skipping document");
                    skipped.push(SkippedFile {
                        path: path.display().to_string(),
                        reason: error.to_string(),
                    });
                }
            }
        }
        skipped.sort_by(|a, b| a.path.cmp(&b.path));

        if skipped.is_empty() {
            progress.finish_ok("done");
        } else {
            progress.finish_err(&format!("done, {} skipped", skipped.len()));
        }
        tracing::info!(processed, skipped = skipped.len(), "batch finished");

        Ok(BatchReport {
            input_dir: self.input_dir.display().to_string(),
            output_dir: self.output_dir.display().to_string(),
            mode: self.options.mode,
            processed,
            skipped,
        })
    }

    fn check_directories(&self) -> anyhow::Result<()> {
        if !self.input_dir.is_dir() {
            anyhow::bail!(
                "input directory '{}' does not exist",
                self.input_dir.display()
            );
        }
        if !self.output_dir.is_dir() {
            if !self.batch.create_output_dir {
                anyhow::bail!(
                    "output directory '{}' does not exist (pass --create-output to create it)",
                    self.output_dir.display()
                );
            }
            std::fs::create_dir_all(&self.output_dir).with_context(|| {
                format!(
                    "failed to create output directory '{}'",
                    self.output_dir.display()
                )
            })?;
        }
        Ok(())
    }

    /// Regular files directly inside the input directory with an accepted
    /// extension, sorted by path.
    fn eligible_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.input_dir).with_context(|| {
            format!(
                "failed to list input directory '{}'",
                self.input_dir.display()
            )
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| readable_entry(&self.input_dir, entry))
            .filter(|path| path.is_file() && self.accepts(path))
            .collect();
        files.sort();
        Ok(files)
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.batch.accepts_extension(ext))
    }

    /// Pair each input with its output path. When two inputs share a stem
    /// (`a.html`, `a.txt`) the first in path order keeps the output.
    fn assign_outputs(&self, inputs: Vec<PathBuf>) -> (Vec<(PathBuf, PathBuf)>, Vec<FileError>) {
        let mut taken: HashMap<PathBuf, PathBuf> = HashMap::new();
        let mut jobs = Vec::with_capacity(inputs.len());
        let mut collisions = Vec::new();

        for input in inputs {
            let output = self.output_path(&input);
            if let Some(winner) = taken.get(&output) {
                collisions.push(FileError::OutputCollision {
                    path: input,
                    output,
                    winner: winner.clone(),
                });
                continue;
            }
            taken.insert(output.clone(), input.clone());
            jobs.push((input, output));
        }
        (jobs, collisions)
    }

    /// `<stem>.<output_extension>`; only the last extension of the input is
    /// replaced, so `a.b.html` becomes `a.b.txt`.
    fn output_path(&self, input: &Path) -> PathBuf {
        let mut name = OsString::from(input.file_stem().unwrap_or_default());
        name.push(".");
        name.push(&self.batch.output_extension);
        self.output_dir.join(name)
    }

    fn process_file(&self, input: &Path, output: &Path) -> Result<PathBuf, FileError> {
        let decoded = read_document(input).map_err(|error| FileError::from_parser(input, error))?;
        let canonical = canonicalize(&decoded.text, &self.options);
        std::fs::write(output, canonical).map_err(|source| FileError::Write {
            path: output.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            encoding = %decoded.encoding,
            "document canonicalized"
        );
        Ok(output.to_path_buf())
    }
}

/// The input path a skip is reported under.
fn skipped_path(error: &FileError) -> &Path {
    match error {
        FileError::Read { path, .. }
        | FileError::Decode { path, .. }
        | FileError::Write { path, .. }
        | FileError::OutputCollision { path, .. } => path,
    }
}

/// Path of a listed entry; entries the OS fails to read are logged and left out.
fn readable_entry(dir: &Path, entry: std::io::Result<std::fs::DirEntry>) -> Option<PathBuf> {
    match entry {
        Ok(entry) => Some(entry.path()),
        Err(error) => {
            tracing::warn!(dir = %dir.display(), %error, "skipping unreadable directory entry");
            None
        }
    }
}
