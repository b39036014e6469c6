//! Path Resolver
//!
//! Maps a logical file name and a storage area to a location on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// One of the two disjoint storage areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    /// Individual inventory lists
    List,
    /// Merged summaries
    Recap,
}

impl Area {
    /// `true` selects the recap area
    pub fn from_recap_flag(is_recap: bool) -> Self {
        if is_recap {
            Area::Recap
        } else {
            Area::List
        }
    }
}

/// Resolves file names into the list and recap directories
#[derive(Debug, Clone)]
pub struct PathResolver {
    list_dir: PathBuf,
    recap_dir: PathBuf,
}

impl PathResolver {
    pub fn new(config: &Config) -> Self {
        Self {
            list_dir: config.root_dir.join(&config.list_dir),
            recap_dir: config.root_dir.join(&config.recap_dir),
        }
    }

    /// Location of `name` inside `area`. Never touches the filesystem.
    pub fn resolve(&self, name: &str, area: Area) -> PathBuf {
        self.area_dir(area).join(name)
    }

    /// Directory backing an area
    pub fn area_dir(&self, area: Area) -> &Path {
        match area {
            Area::List => &self.list_dir,
            Area::Recap => &self.recap_dir,
        }
    }

    /// Create both area directories if they are missing
    pub fn ensure_areas(&self) -> Result<()> {
        fs::create_dir_all(&self.list_dir)?;
        fs::create_dir_all(&self.recap_dir)?;
        Ok(())
    }
}
