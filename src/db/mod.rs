use std::path::{Path, PathBuf};

pub mod codec;
pub mod helpers;
pub mod models;
pub mod repositories;

pub use models::{
    record_header, Catalog, CatalogRow, NameIndex, RecordLog, RecordRow, CATALOG_COLUMNS,
    RECORD_COLUMNS,
};
pub use repositories::records::SaveOutcome;

/// Handle on the two diary files.
///
/// Nothing is cached here: every load goes back to disk, so edits made by
/// other programs between calls are picked up.
#[derive(Debug, Clone)]
pub struct Database {
    catalog_path: PathBuf,
    records_path: PathBuf,
}

impl Database {
    pub fn new(catalog_path: impl Into<PathBuf>, records_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            records_path: records_path.into(),
        }
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn records_path(&self) -> &Path {
        &self.records_path
    }
}
