use std::{
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
};

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::db::{
    codec,
    helpers::{needs_header, read_table},
    models::{record_header, CatalogRow, RecordLog, RecordRow, NAME_COLUMN, RECORD_COLUMNS},
    Database,
};
use crate::log_info;

const ENABLE_LOGS: bool = true;

/// Result of persisting a batch that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SaveOutcome {
    /// Number of records appended.
    Saved(usize),
    NoItemsToSave,
}

impl Database {
    /// Load the consumption log, header included.
    /// Returns `None` when no record file exists yet.
    pub fn load_records(&self) -> Result<Option<RecordLog>> {
        let Some(rows) = read_table(self.records_path(), RECORD_COLUMNS)? else {
            return Ok(None);
        };

        let log = RecordLog::from_rows(rows.into_iter().map(RecordRow::new).collect());
        if let Some(log) = &log {
            if log.has_no_data() {
                log_info!("{} holds only a header", self.records_path().display());
            }
            log_info!(
                "Loaded {} records from {}",
                log.data_rows().len(),
                self.records_path().display()
            );
        }
        Ok(log)
    }

    /// Append `batch` to the record file, writing the derived header first
    /// when the file is new or holds only blank lines.
    ///
    /// Not transactional: rows written before an I/O error stay in the file
    /// and the whole call reports the error.
    pub fn append_records(
        &self,
        catalog_header: &CatalogRow,
        batch: &[RecordRow],
    ) -> Result<SaveOutcome> {
        if batch.is_empty() {
            return Ok(SaveOutcome::NoItemsToSave);
        }

        if let Some((position, row)) = batch
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != RECORD_COLUMNS)
        {
            bail!(
                "record {} has {} fields, expected {}",
                position + 1,
                row.len(),
                RECORD_COLUMNS
            );
        }

        let path = self.records_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create record directory {}", parent.display())
            })?;
        }

        // A blank file is rewritten from scratch so the header lands on line one.
        let write_header = needs_header(path)?;
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(!write_header)
            .truncate(write_header)
            .open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        if write_header {
            let header = record_header(catalog_header);
            writer
                .write_all(codec::encode(header.fields(), NAME_COLUMN).as_bytes())
                .with_context(|| format!("failed to write header to {}", path.display()))?;
        }

        for row in batch {
            writer
                .write_all(codec::encode(row.fields(), NAME_COLUMN).as_bytes())
                .with_context(|| format!("failed to append record to {}", path.display()))?;
        }

        writer
            .flush()
            .with_context(|| format!("failed to flush {}", path.display()))?;

        log_info!(
            "Appended {} records to {}{}",
            batch.len(),
            path.display(),
            if write_header { " (new file)" } else { "" }
        );

        Ok(SaveOutcome::Saved(batch.len()))
    }
}
