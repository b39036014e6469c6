//! # Stockpile
//!
//! Small product inventories kept as CSV files in two areas:
//! - **list** files, one inventory each
//! - **recap** files, produced by merging list files
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Front-end (CLI / render)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command → Outcome
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! │              (Path Resolver, area setup)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────┐
//!          │            │            │
//!          ▼            ▼            ▼
//!   ┌─────────────┐ ┌─────────┐ ┌─────────┐
//!   │ RecordStore │ │  Merge  │ │ Search  │
//!   │ (CSV file)  │ │ Engine  │ │ Engine  │
//!   └─────────────┘ └────┬────┘ └────┬────┘
//!          ▲             │           │
//!          └─────────────┴───────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod paths;
pub mod store;
pub mod merge;
pub mod search;
pub mod command;
pub mod engine;
pub mod render;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use command::{Command, DeleteOutcome, Outcome};
pub use config::Config;
pub use engine::Engine;
pub use error::{Result, StockError};
pub use paths::Area;
pub use record::{Field, Header, Record};
pub use search::SearchCriteria;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Stockpile
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
