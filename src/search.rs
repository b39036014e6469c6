//! Search Engine
//!
//! Linear scan of one store, keeping records that satisfy any supplied criterion.
//!
//! Criteria combine with OR: adding a criterion widens the result set.
//! Comparison is exact text equality, case-sensitive, with no numeric parsing.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, StockError};
use crate::record::{Field, Header, Record};
use crate::store::RecordScanner;

/// Up to four optional per-field equality tests
///
/// An empty string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
    pub category: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn quantity(mut self, value: impl Into<String>) -> Self {
        self.quantity = Some(value.into());
        self
    }

    pub fn unit_price(mut self, value: impl Into<String>) -> Self {
        self.unit_price = Some(value.into());
        self
    }

    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    /// The supplied criteria as (field, expected value), empty values dropped
    pub fn active(&self) -> Vec<(Field, &str)> {
        [
            (Field::Name, &self.name),
            (Field::Quantity, &self.quantity),
            (Field::UnitPrice, &self.unit_price),
            (Field::Category, &self.category),
        ]
        .into_iter()
        .filter_map(|(field, value)| match value.as_deref() {
            Some(v) if !v.is_empty() => Some((field, v)),
            _ => None,
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }

    /// True if any supplied criterion equals the matching field
    pub fn matches(&self, record: &Record) -> bool {
        self.active()
            .iter()
            .any(|(field, expected)| record.get(*field) == *expected)
    }
}

/// One record that satisfied the criteria
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub record: Record,
    /// (header label, value) in column order
    pub fields: Vec<(String, String)>,
}

/// All matches of one search, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub header: Header,
    pub matches: Vec<SearchMatch>,
}

impl SearchResults {
    /// The zero-match signal
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.matches.iter().map(|m| &m.record)
    }
}

/// Scans stores for records matching criteria
pub struct SearchEngine;

impl SearchEngine {
    /// Search the store at `path`
    ///
    /// Fails with `InvalidArgument` before opening anything when no criterion is supplied.
    pub fn search(path: &Path, criteria: &SearchCriteria) -> Result<SearchResults> {
        if criteria.is_empty() {
            return Err(StockError::InvalidArgument(
                "search needs at least one of name, quantity, unit price or category".to_string(),
            ));
        }

        let scanner = RecordScanner::open(path)?;
        let header = scanner.header().clone();
        let mut matches = Vec::new();

        for record in scanner {
            let record = record?;
            if criteria.matches(&record) {
                let fields = header
                    .pair(&record)
                    .into_iter()
                    .map(|(label, value)| (label.to_string(), value.to_string()))
                    .collect();
                matches.push(SearchMatch { record, fields });
            }
        }

        debug!(path = %path.display(), matches = matches.len(), "search complete");
        Ok(SearchResults { header, matches })
    }
}
