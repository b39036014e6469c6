//! Record Store
//!
//! Owns one store file and provides create, append, filtered rewrite and scan.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, StockError};
use crate::record::{Header, Record};

use super::{csv_writer, RecordScanner};

/// Result of `RecordStore::create`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new file holding only the header was written
    Created,
    /// A file was already there; its bytes were left untouched
    AlreadyExists,
}

/// Everything a store holds, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreContents {
    pub header: Header,
    pub records: Vec<Record>,
}

/// Handle on one store file
///
/// ## Concurrency
/// None. Callers serialize access to a given path; two processes rewriting
/// the same file at once may lose one of the rewrites.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create the file with `header` as its only line
    ///
    /// Uses exclusive creation, so an existing file is never truncated or rewritten.
    pub fn create(&self, header: &Header) -> Result<CreateOutcome> {
        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %self.path.display(), "store already exists");
                return Ok(CreateOutcome::AlreadyExists);
            }
            Err(e) => return Err(e.into()),
        };

        let mut writer = csv_writer(file);
        writer.write_record(header.labels())?;
        writer.flush()?;

        info!(path = %self.path.display(), "store created");
        Ok(CreateOutcome::Created)
    }

    /// Append one record after the existing content
    pub fn append(&self, record: &Record) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| StockError::from_open(e, &self.path))?;

        let mut writer = csv_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        debug!(path = %self.path.display(), name = %record.name, "record appended");
        Ok(())
    }

    /// Drop every record for which `predicate` is true; returns how many were dropped
    ///
    /// ## Steps
    /// 1. Stream the file into a temp sibling, header first, kept records in order
    /// 2. Flush and fsync the sibling
    /// 3. Rename the sibling over the original
    ///
    /// The original is untouched until step 3. A failure before then leaves it intact
    /// and the temp file is removed on drop. The sibling takes the original's permissions.
    ///
    /// The header and kept records are re-encoded, not copied byte for byte: values stay
    /// the same, but quoting is minimal and lines end in CRLF afterwards. A call that
    /// drops nothing leaves the file's bytes unchanged.
    pub fn delete_matching<P>(&self, mut predicate: P) -> Result<usize>
    where
        P: FnMut(&Record) -> bool,
    {
        let scanner = RecordScanner::open(&self.path)?;
        let mut temp = self.temp_sibling()?;
        let mut removed = 0;

        {
            let mut writer = csv_writer(temp.as_file_mut());
            writer.write_record(scanner.header().labels())?;

            for record in scanner {
                let record = record?;
                if predicate(&record) {
                    removed += 1;
                } else {
                    writer.serialize(&record)?;
                }
            }
            writer.flush()?;
        }

        if removed == 0 {
            debug!(path = %self.path.display(), "no matching records, file left as is");
            return Ok(0);
        }

        fs::set_permissions(temp.path(), fs::metadata(&self.path)?.permissions())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| StockError::Io(e.error))?;

        info!(path = %self.path.display(), removed, "records deleted");
        Ok(removed)
    }

    /// Read the header and every record
    pub fn read_all(&self) -> Result<StoreContents> {
        let scanner = self.scan()?;
        let header = scanner.header().clone();
        let records = scanner.collect::<Result<Vec<_>>>()?;
        Ok(StoreContents { header, records })
    }

    /// Open a sequential scan over the records
    pub fn scan(&self) -> Result<RecordScanner> {
        RecordScanner::open(&self.path)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Temp file in the same directory, so the final rename stays on one filesystem
    fn temp_sibling(&self) -> Result<tempfile::NamedTempFile> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let stem = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let temp = tempfile::Builder::new()
            .prefix(&format!(".{}.", stem))
            .suffix(".tmp")
            .tempfile_in(dir)?;
        Ok(temp)
    }
}
