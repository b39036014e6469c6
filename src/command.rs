//! Command definitions
//!
//! Already-validated requests from a front-end, and their structured outcomes.

use crate::merge::MergeReport;
use crate::paths::Area;
use crate::record::Record;
use crate::search::{SearchCriteria, SearchResults};
use crate::store::CreateOutcome;

/// A request for the engine
#[derive(Debug, Clone)]
pub enum Command {
    /// Create a store holding only the header
    Create { file: String, area: Area },

    /// Append one record
    Add {
        file: String,
        area: Area,
        record: Record,
    },

    /// Remove every record whose name equals `product`
    Delete {
        file: String,
        area: Area,
        product: String,
    },

    /// Merge list files into one recap file
    Merge { inputs: Vec<String>, output: String },

    /// Find records matching any criterion
    Search {
        file: String,
        area: Area,
        criteria: SearchCriteria,
    },
}

/// Result of `Engine::delete`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub product: String,
    /// Records dropped; zero means the product was not found
    pub removed: usize,
}

impl DeleteOutcome {
    pub fn found(&self) -> bool {
        self.removed > 0
    }
}

/// Structured result of one command, rendered by the front-end
#[derive(Debug, Clone)]
pub enum Outcome {
    Created {
        file: String,
        outcome: CreateOutcome,
    },
    Added {
        file: String,
    },
    Deleted {
        file: String,
        outcome: DeleteOutcome,
    },
    Merged {
        output: String,
        report: MergeReport,
    },
    Found {
        file: String,
        area: Area,
        results: SearchResults,
    },
}
