//! Record Scanner
//!
//! Sequential iteration over the records of one store file.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{Result, StockError};
use crate::record::{Header, Record, FIELD_COUNT};

use super::csv_reader;

/// Iterator over store records in file order, header already consumed
pub struct RecordScanner {
    path: PathBuf,
    reader: csv::Reader<File>,
    header: Header,
    row: csv::StringRecord,
}

impl RecordScanner {
    /// Open `path` and read its header line
    ///
    /// Fails with `NotFound` if the file is absent and `MissingHeader` if it is empty.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| StockError::from_open(e, path))?;
        let mut reader = csv_reader(file);

        let mut row = csv::StringRecord::new();
        if !reader.read_record(&mut row)? {
            return Err(StockError::MissingHeader(path.to_path_buf()));
        }
        let header = Self::parse_header(path, &row)?;

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            header,
            row,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_header(path: &Path, row: &csv::StringRecord) -> Result<Header> {
        Header::from_labels(row.iter()).map_err(|_| StockError::MalformedRecord {
            path: path.to_path_buf(),
            line: Self::line_of(row),
            fields: row.len(),
        })
    }

    fn line_of(row: &csv::StringRecord) -> u64 {
        row.position().map(|p| p.line()).unwrap_or(0)
    }
}

impl Iterator for RecordScanner {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.row) {
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
            Ok(true) => {
                if self.row.len() != FIELD_COUNT {
                    return Some(Err(StockError::MalformedRecord {
                        path: self.path.clone(),
                        line: Self::line_of(&self.row),
                        fields: self.row.len(),
                    }));
                }
                Some(self.row.deserialize::<Record>(None).map_err(Into::into))
            }
        }
    }
}
