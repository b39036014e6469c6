//! Engine Module
//!
//! The facade front-ends call into.
//!
//! ## Responsibilities
//! - Resolve logical file names into the list or recap area
//! - Make sure both areas exist before every operation
//! - Route commands to the store, merge and search components
//! - Return structured outcomes; rendering is left to the caller

use std::path::PathBuf;

use tracing::debug;

use crate::command::{Command, DeleteOutcome, Outcome};
use crate::config::Config;
use crate::error::Result;
use crate::merge::{MergeEngine, MergeReport};
use crate::paths::{Area, PathResolver};
use crate::record::Record;
use crate::search::{SearchCriteria, SearchEngine, SearchResults};
use crate::store::{CreateOutcome, RecordStore, StoreContents};

/// Inventory engine over one storage root
///
/// ## Concurrency Model
/// Single-threaded and synchronous. There is no cross-process locking: callers
/// must serialize operations on the same file name.
pub struct Engine {
    config: Config,
    resolver: PathResolver,
}

impl Engine {
    /// Open an engine, creating both storage areas if needed
    pub fn open(config: Config) -> Result<Self> {
        let resolver = PathResolver::new(&config);
        resolver.ensure_areas()?;

        debug!(
            list = %resolver.area_dir(Area::List).display(),
            recap = %resolver.area_dir(Area::Recap).display(),
            "engine opened"
        );

        Ok(Self { config, resolver })
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        match command {
            Command::Create { file, area } => {
                let outcome = self.create(&file, area)?;
                Ok(Outcome::Created { file, outcome })
            }
            Command::Add { file, area, record } => {
                self.add(&file, area, &record)?;
                Ok(Outcome::Added { file })
            }
            Command::Delete {
                file,
                area,
                product,
            } => {
                let outcome = self.delete(&file, area, &product)?;
                Ok(Outcome::Deleted { file, outcome })
            }
            Command::Merge { inputs, output } => {
                let report = self.merge(&inputs, &output)?;
                Ok(Outcome::Merged { output, report })
            }
            Command::Search {
                file,
                area,
                criteria,
            } => {
                let results = self.search(&file, area, &criteria)?;
                Ok(Outcome::Found {
                    file,
                    area,
                    results,
                })
            }
        }
    }

    /// Create a store with the configured header
    pub fn create(&self, file: &str, area: Area) -> Result<CreateOutcome> {
        self.store(file, area)?.create(&self.config.header)
    }

    /// Append a record to an existing store
    pub fn add(&self, file: &str, area: Area, record: &Record) -> Result<()> {
        self.store(file, area)?.append(record)
    }

    /// Remove every record named exactly `product`
    pub fn delete(&self, file: &str, area: Area, product: &str) -> Result<DeleteOutcome> {
        let removed = self
            .store(file, area)?
            .delete_matching(|record| record.name == product)?;

        Ok(DeleteOutcome {
            product: product.to_string(),
            removed,
        })
    }

    /// Merge list files into a recap file
    pub fn merge<S: AsRef<str>>(&self, inputs: &[S], output: &str) -> Result<MergeReport> {
        self.resolver.ensure_areas()?;

        let input_paths: Vec<PathBuf> = inputs
            .iter()
            .map(|name| self.resolver.resolve(name.as_ref(), Area::List))
            .collect();
        let output_path = self.resolver.resolve(output, Area::Recap);

        MergeEngine::merge(&input_paths, &output_path)
    }

    /// Find records matching any of `criteria`
    pub fn search(&self, file: &str, area: Area, criteria: &SearchCriteria) -> Result<SearchResults> {
        let store = self.store(file, area)?;
        SearchEngine::search(store.path(), criteria)
    }

    /// Read a whole store
    pub fn read(&self, file: &str, area: Area) -> Result<StoreContents> {
        self.store(file, area)?.read_all()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Location `file` resolves to inside `area`
    pub fn path_of(&self, file: &str, area: Area) -> PathBuf {
        self.resolver.resolve(file, area)
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Store handle for `file`, with both areas ensured first
    fn store(&self, file: &str, area: Area) -> Result<RecordStore> {
        self.resolver.ensure_areas()?;
        Ok(RecordStore::new(self.resolver.resolve(file, area)))
    }
}
