use anyhow::Result;

use crate::db::{
    helpers::read_table,
    models::{Catalog, CatalogRow, CATALOG_COLUMNS},
    Database,
};
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

impl Database {
    /// Load the food catalog, header included.
    /// Returns `None` when the catalog file does not exist.
    pub fn load_catalog(&self) -> Result<Option<Catalog>> {
        let Some(rows) = read_table(self.catalog_path(), CATALOG_COLUMNS)? else {
            return Ok(None);
        };

        let catalog = Catalog::from_rows(rows.into_iter().map(CatalogRow::new).collect());
        if let Some(catalog) = &catalog {
            if catalog.has_no_data() {
                log_warn!("{} has a header but no foods", self.catalog_path().display());
            }
            log_info!(
                "Loaded {} foods from {}",
                catalog.data_rows().len(),
                self.catalog_path().display()
            );
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::db::{codec, models::NameIndex};
    use pretty_assertions::assert_eq;

    fn line(name: &str, first: &str) -> String {
        let mut fields = vec![first.to_string(), "9".to_string(), name.to_string()];
        fields.resize(CATALOG_COLUMNS, "NULL".to_string());
        codec::encode(&fields, 2)
    }

    #[test]
    fn absent_catalog_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("SourceDB.csv"), dir.path().join("RecordDB.csv"));
        assert!(db.load_catalog().unwrap().is_none());
    }

    #[test]
    fn loads_header_and_rows_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SourceDB.csv");
        let contents = [
            line("Food name", "id"),
            line("Apple, raw", "1"),
            line("Bread", "2"),
        ]
        .concat();
        fs::write(&path, contents).unwrap();

        let db = Database::new(&path, dir.path().join("RecordDB.csv"));
        let catalog = db.load_catalog().unwrap().unwrap();

        assert_eq!(catalog.rows().len(), 3);
        assert!(catalog.rows().iter().all(|row| row.len() == CATALOG_COLUMNS));
        assert_eq!(catalog.header().name(), Some("Food name"));

        let index = NameIndex::build(&catalog);
        assert_eq!(index.find("Apple, raw"), Some(1));
        assert_eq!(index.find("Bread"), Some(2));
    }
}
