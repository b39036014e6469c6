//! Configuration for Stockpile
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::record::Header;

/// Main configuration for a Stockpile instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory holding both storage areas
    /// Internal structure:
    ///   {root_dir}/
    ///     ├── {list_dir}/     (individual list files)
    ///     └── {recap_dir}/    (merged recap files)
    pub root_dir: PathBuf,

    /// Directory name of the list area, relative to `root_dir`
    pub list_dir: String,

    /// Directory name of the recap area, relative to `root_dir`
    pub recap_dir: String,

    // -------------------------------------------------------------------------
    // Schema Configuration
    // -------------------------------------------------------------------------
    /// Column labels written as the first line of every new file
    pub header: Header,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            list_dir: "liste_csv".to_string(),
            recap_dir: "recap_csv".to_string(),
            header: Header::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the root directory (parent of both areas)
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.root_dir = path.into();
        self
    }

    /// Set the list area directory name
    pub fn list_dir(mut self, name: impl Into<String>) -> Self {
        self.config.list_dir = name.into();
        self
    }

    /// Set the recap area directory name
    pub fn recap_dir(mut self, name: impl Into<String>) -> Self {
        self.config.recap_dir = name.into();
        self
    }

    /// Set the header written into newly created files
    pub fn header(mut self, header: Header) -> Self {
        self.config.header = header;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
