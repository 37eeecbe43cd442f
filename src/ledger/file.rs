use rust_decimal::Decimal;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{LedgerError, Record};

/// Returns an empty list if the ledger file doesn't exist yet
pub fn load(path: &Path) -> Result<Vec<Record>, LedgerError> {
    log::info!("Loading ledger from {}...", path.display());
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("Ledger file doesn't exist yet, starting empty");
            return Ok(vec![]);
        }
        Err(err) => return Err(err.into()),
    };

    let mut records = vec![];
    let mut total = Decimal::ZERO;
    for (index, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let record = Record::decode(line).map_err(|source| LedgerError::Parse {
            line: index + 1,
            source,
        })?;
        total = total
            .checked_add(record.amount())
            .ok_or(LedgerError::TotalOverflow)?;
        records.push(record);
    }

    log::info!("Loading ledger...done ({} entries)", records.len());

    Ok(records)
}

pub fn save(records: &[Record], path: &Path) -> Result<(), LedgerError> {
    log::info!("Saving ledger to {}...", path.display());

    let content: String = records
        .iter()
        .map(|record| record.encode() + "\n")
        .collect();

    // First write to temporary file so we don't lose data if writing fails halfway
    let tmppath = temp_path(path)?;
    fs::write(&tmppath, content)?;

    // Ok, writing succeeded, let's now replace the real file with the tmpfile
    fs::rename(&tmppath, path)?;

    log::info!("Saving ledger...done");

    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf, LedgerError> {
    let filename = path.file_name().ok_or(LedgerError::NoFileName)?;
    let mut tmpname = filename.to_os_string();
    tmpname.push(".tmp");
    Ok(path.with_file_name(tmpname))
}
