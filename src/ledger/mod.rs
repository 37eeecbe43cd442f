use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

mod file;
mod record;

pub use file::{load, save};
pub use record::{parse_amount, parse_date, ParseError, Record, DATE_FORMAT};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("line {line} of the ledger file is malformed: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("invalid entry: {0}")]
    InvalidEntry(#[from] ParseError),
    #[error("the total of all donations would exceed {}", Decimal::MAX)]
    TotalOverflow,
    #[error("ledger path has no file name")]
    NoFileName,
    #[error("ledger file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The donations recorded so far, mirrored to a text file.
///
/// After every successful call, the entries in memory match the file on disk.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    entries: Vec<Record>,
}

impl Ledger {
    /// Opens the ledger stored at `path`. A missing file is an empty ledger.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        let entries = load(&path)?;
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[Record] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Throws away the entries in memory and reads them again from the file.
    /// If loading fails, the current entries are kept.
    pub fn reload(&mut self) -> Result<(), LedgerError> {
        self.entries = load(&self.path)?;
        Ok(())
    }

    /// Adds `record` and writes the whole ledger back to the file.
    /// If writing fails, `record` is removed again so memory and file still agree.
    /// Records that would make [Ledger::total] overflow are rejected.
    pub fn append(&mut self, record: Record) -> Result<(), LedgerError> {
        log::debug!("Appending {record:?}");
        if self.total().checked_add(record.amount()).is_none() {
            return Err(LedgerError::TotalOverflow);
        }
        self.entries.push(record);
        if let Err(err) = save(&self.entries, &self.path) {
            log::warn!("Failed to persist ledger, rolling back the new entry: {err}");
            self.entries.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Parses the raw text of each field, appends the resulting record and returns it.
    pub fn submit(
        &mut self,
        category: &str,
        amount: &str,
        date: &str,
    ) -> Result<Record, LedgerError> {
        let record = Record::from_fields(category, amount, date)?;
        self.append(record.clone())?;
        Ok(record)
    }

    /// Can't overflow: `load` and `append` only accept entries whose running sum fits.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(Record::amount).sum()
    }
}
