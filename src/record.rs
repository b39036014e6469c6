//! Record Schema
//!
//! The fixed 4-column product layout shared by every list and recap file.
//!
//! ## Column Order
//! ```text
//! ┌──────────────┬──────────┬──────────────┬──────────┐
//! │ name (0)     │ qty (1)  │ price (2)    │ cat (3)  │
//! └──────────────┴──────────┴──────────────┴──────────┘
//! ```
//!
//! Quantity and price are kept as raw text. Nothing here parses numbers.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StockError};

/// Number of columns in every header and record
pub const FIELD_COUNT: usize = 4;

/// Column labels used when no header is configured
pub const DEFAULT_LABELS: [&str; FIELD_COUNT] =
    ["nom du produit", "quantité", "prix unitaire", "catégorie"];

/// A column position in the fixed layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Quantity,
    UnitPrice,
    Category,
}

impl Field {
    /// All fields in column order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Name,
        Field::Quantity,
        Field::UnitPrice,
        Field::Category,
    ];

    /// Zero-based column index
    pub fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Quantity => 1,
            Field::UnitPrice => 2,
            Field::Category => 3,
        }
    }
}

/// One product entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
    pub category: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit_price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit_price: unit_price.into(),
            category: category.into(),
        }
    }

    /// Build a record from loose values, rejecting anything but exactly 4
    pub fn from_fields<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: Vec<String> = fields.into_iter().map(Into::into).collect();
        if values.len() != FIELD_COUNT {
            return Err(StockError::InvalidArgument(format!(
                "a record needs exactly {} fields, got {}",
                FIELD_COUNT,
                values.len()
            )));
        }

        let category = values.pop().unwrap_or_default();
        let unit_price = values.pop().unwrap_or_default();
        let quantity = values.pop().unwrap_or_default();
        let name = values.pop().unwrap_or_default();
        Ok(Self::new(name, quantity, unit_price, category))
    }

    /// Value stored in the given column
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Quantity => &self.quantity,
            Field::UnitPrice => &self.unit_price,
            Field::Category => &self.category,
        }
    }

    /// Values in column order
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.name,
            &self.quantity,
            &self.unit_price,
            &self.category,
        ]
    }
}

/// The column-label line at the top of every file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header([String; FIELD_COUNT]);

impl Header {
    pub fn new(labels: [&str; FIELD_COUNT]) -> Self {
        Self(labels.map(|label| label.to_string()))
    }

    /// Build a header from loose labels, rejecting anything but exactly 4
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let count = labels.len();
        let labels: [String; FIELD_COUNT] = labels.try_into().map_err(|_| {
            StockError::InvalidArgument(format!(
                "a header needs exactly {} labels, got {}",
                FIELD_COUNT, count
            ))
        })?;
        Ok(Self(labels))
    }

    pub fn labels(&self) -> &[String; FIELD_COUNT] {
        &self.0
    }

    /// Label of the given column
    pub fn label(&self, field: Field) -> &str {
        &self.0[field.index()]
    }

    /// Pair every label with the matching value of `record`
    pub fn pair<'a>(&'a self, record: &'a Record) -> Vec<(&'a str, &'a str)> {
        self.0
            .iter()
            .map(String::as_str)
            .zip(record.fields())
            .collect()
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(DEFAULT_LABELS)
    }
}
