//! Store Module
//!
//! One delimited-text file per store, header first, one record per line.
//!
//! ## Responsibilities
//! - Create a file holding only the header (idempotent, never truncates)
//! - Append a record after the existing content
//! - Drop records matching a predicate via rewrite-and-rename
//! - Sequential scans yielding the header, then records in file order
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ nom du produit,quantité,prix unitaire,catégorie\r\n  │  ← header (line 1)
//! ├──────────────────────────────────────────────────────┤
//! │ Banane,10,1.5,Fruits\r\n                             │  ← records
//! │ "Jus, pressé",2,"3,5",Boissons\r\n                   │    (quoted when needed,
//! │ "Clou ""6mm""",100,0.1,Outils\r\n                    │     quotes doubled)
//! └──────────────────────────────────────────────────────┘
//! ```

mod record_store;
mod scanner;

use std::io;

pub use record_store::{CreateOutcome, RecordStore, StoreContents};
pub use scanner::RecordScanner;

/// Writer settings shared by every component that emits store lines
pub(crate) fn csv_writer<W: io::Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(inner)
}

/// Reader settings shared by every component that scans store lines
pub(crate) fn csv_reader<R: io::Read>(inner: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(inner)
}
