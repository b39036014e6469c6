//! Presentation layer
//!
//! Turns engine outcomes and errors into the text a front-end prints.

use crate::command::Outcome;
use crate::error::StockError;
use crate::merge::SkipReason;
use crate::paths::Area;
use crate::store::CreateOutcome;

const SEPARATOR: &str = "------------------------------";

/// Human-readable text for a successful command
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Created { file, outcome } => match outcome {
            CreateOutcome::Created => format!("File '{}' created.\n", file),
            CreateOutcome::AlreadyExists => format!("File '{}' already exists.\n", file),
        },
        Outcome::Added { file } => format!("Product added to '{}'.\n", file),
        Outcome::Deleted { file, outcome } => {
            if outcome.found() {
                format!(
                    "Product '{}' deleted from '{}' ({} record(s)).\n",
                    outcome.product, file, outcome.removed
                )
            } else {
                format!("Product '{}' not found in '{}'.\n", outcome.product, file)
            }
        }
        Outcome::Merged { output, report } => {
            let mut out = String::new();
            for skipped in &report.skipped {
                let reason = match skipped.reason {
                    SkipReason::Missing => "does not exist",
                    SkipReason::Empty => "is empty",
                };
                out.push_str(&format!(
                    "Skipped: '{}' {}.\n",
                    skipped.path.display(),
                    reason
                ));
            }
            out.push_str(&format!(
                "Recap file created: '{}' ({} record(s) from {} file(s)).\n",
                output,
                report.records_written,
                report.merged.len()
            ));
            out
        }
        Outcome::Found {
            file,
            area,
            results,
        } => {
            if results.is_empty() {
                return format!("No product matches the criteria in '{}'.\n", file);
            }

            let kind = match area {
                Area::List => "list file",
                Area::Recap => "recap file",
            };
            let mut out = format!("Products found in {} '{}':\n", kind, file);
            for found in &results.matches {
                for (label, value) in &found.fields {
                    out.push_str(&format!("{}: {}\n", label, value));
                }
                out.push_str(SEPARATOR);
                out.push('\n');
            }
            out
        }
    }
}

/// Human-readable text for a failed command
pub fn render_error(error: &StockError) -> String {
    match error {
        StockError::NotFound(path) => format!(
            "File '{}' does not exist. Create it first.",
            path.display()
        ),
        StockError::InvalidArgument(reason) => format!("Invalid argument: {}.", reason),
        other => format!("Error: {}", other),
    }
}
