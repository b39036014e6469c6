//! Merge Engine
//!
//! Streams the records of several stores, in input order, into one new store.
//!
//! ## Rules
//! - The output is created or truncated before any input is read
//! - The first header among the opened inputs is written once
//! - Later headers are consumed and dropped, never compared
//! - Missing or empty inputs are skipped and reported, never fatal
//! - With no usable input the output exists but holds zero lines

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, StockError};
use crate::store::{csv_reader, csv_writer};

/// Why an input contributed nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No file at the input path
    Missing,
    /// The file exists but has no header line
    Empty,
}

/// An input left out of the merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedInput {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Summary of one merge run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Inputs whose records were copied, in input order
    pub merged: Vec<PathBuf>,
    /// Inputs left out, in input order
    pub skipped: Vec<SkippedInput>,
    /// Records written to the output (header excluded)
    pub records_written: usize,
    /// Whether the output received a header line
    pub header_written: bool,
}

impl MergeReport {
    /// True when every input was merged
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Merges stores into a recap store
pub struct MergeEngine;

impl MergeEngine {
    /// Merge `inputs` into `output`, replacing whatever `output` held
    pub fn merge<P: AsRef<Path>>(inputs: &[P], output: &Path) -> Result<MergeReport> {
        let mut writer = csv_writer(File::create(output)?);
        let mut report = MergeReport::default();
        let mut row = csv::StringRecord::new();

        for input in inputs {
            let input = input.as_ref();

            let file = match File::open(input).map_err(|e| StockError::from_open(e, input)) {
                Ok(file) => file,
                Err(StockError::NotFound(path)) => {
                    warn!(path = %path.display(), "merge input missing, skipped");
                    report.skipped.push(SkippedInput {
                        path,
                        reason: SkipReason::Missing,
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let mut reader = csv_reader(file);
            if !reader.read_record(&mut row)? {
                warn!(path = %input.display(), "merge input empty, skipped");
                report.skipped.push(SkippedInput {
                    path: input.to_path_buf(),
                    reason: SkipReason::Empty,
                });
                continue;
            }

            if !report.header_written {
                writer.write_record(&row)?;
                report.header_written = true;
            }

            let mut copied = 0;
            while reader.read_record(&mut row)? {
                writer.write_record(&row)?;
                copied += 1;
            }

            debug!(path = %input.display(), records = copied, "merge input copied");
            report.records_written += copied;
            report.merged.push(input.to_path_buf());
        }

        writer.flush()?;

        info!(
            output = %output.display(),
            merged = report.merged.len(),
            skipped = report.skipped.len(),
            records = report.records_written,
            "merge complete"
        );
        Ok(report)
    }
}
