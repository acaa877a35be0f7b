use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::db::{Catalog, CatalogRow, Database, NameIndex, RecordRow, SaveOutcome};
use crate::{log_debug, log_info};

use super::{parse_mass, SelectionBatch, ValidationError};

const ENABLE_LOGS: bool = true;

/// Outcome of looking up a typed or auto-completed food name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchOutcome {
    /// Catalog row index (the header is row 0).
    Found(usize),
    NotFound,
    EmptyInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClearOutcome {
    Cleared(usize),
    AlreadyEmpty,
}

pub fn search_food_name(index: &NameIndex, text: &str) -> SearchOutcome {
    if text.is_empty() {
        return SearchOutcome::EmptyInput;
    }
    match index.find(text) {
        Some(row) => SearchOutcome::Found(row),
        None => SearchOutcome::NotFound,
    }
}

/// Owns the unsaved batch and turns raw user input into records.
#[derive(Debug, Default)]
pub struct SelectionController {
    batch: SelectionBatch,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batch(&self) -> &SelectionBatch {
        &self.batch
    }

    /// Validate `name` and `mass_text` and append the resulting record.
    ///
    /// Checks run in order: name present, name in catalog, mass present,
    /// mass valid. The batch is untouched unless every check passes. `today`
    /// is stamped on the record, so a session crossing midnight produces
    /// rows with different dates.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        index: &NameIndex,
        name: &str,
        mass_text: &str,
        today: NaiveDate,
    ) -> Result<&RecordRow, ValidationError> {
        let row_index = match search_food_name(index, name) {
            SearchOutcome::Found(row_index) => row_index,
            SearchOutcome::EmptyInput => return Err(self.reject(ValidationError::NoNameInput)),
            SearchOutcome::NotFound => return Err(self.reject(ValidationError::NameNotFound)),
        };
        let food = catalog
            .row(row_index)
            .ok_or_else(|| self.reject(ValidationError::NameNotFound))?;

        let mass = parse_mass(mass_text).map_err(|err| self.reject(err))?;

        self.batch.push(RecordRow::compose(food, mass, today));
        log_debug!("Selected {name} ({mass} g) for {today}");

        let rows = self.batch.rows();
        Ok(&rows[rows.len() - 1])
    }

    pub fn clear(&mut self) -> ClearOutcome {
        match self.batch.clear() {
            0 => ClearOutcome::AlreadyEmpty,
            count => ClearOutcome::Cleared(count),
        }
    }

    /// Persist the batch and empty it once the write succeeded.
    /// On error the batch is kept so the user can retry.
    pub fn save(&mut self, db: &Database, catalog_header: &CatalogRow) -> Result<SaveOutcome> {
        let outcome = db.append_records(catalog_header, self.batch.rows())?;
        if let SaveOutcome::Saved(count) = outcome {
            self.batch.clear();
            log_info!("Saved {count} selections");
        }
        Ok(outcome)
    }

    fn reject(&self, err: ValidationError) -> ValidationError {
        log_debug!("Selection rejected: {err}");
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{CATALOG_COLUMNS, DATE_COLUMN, MASS_COLUMN};
    use pretty_assertions::assert_eq;

    fn row(id: &str, name: &str) -> CatalogRow {
        let mut fields = vec![id.to_string(), "9".to_string(), name.to_string()];
        fields.resize(CATALOG_COLUMNS, "1.0".to_string());
        CatalogRow::new(fields)
    }

    fn fixture() -> (Catalog, NameIndex) {
        let catalog = Catalog::from_rows(vec![
            row("id", "Food name"),
            row("1", "Apple"),
            row("2", "Bread, rye"),
        ])
        .unwrap();
        let index = NameIndex::build(&catalog);
        (catalog, index)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn search_distinguishes_empty_missing_and_found() {
        let (_, index) = fixture();
        assert_eq!(search_food_name(&index, ""), SearchOutcome::EmptyInput);
        assert_eq!(search_food_name(&index, "Pear"), SearchOutcome::NotFound);
        assert_eq!(search_food_name(&index, "Bread, rye"), SearchOutcome::Found(2));
    }

    #[test]
    fn valid_selection_composes_record() {
        let (catalog, index) = fixture();
        let mut selection = SelectionController::new();

        let record = selection
            .add(&catalog, &index, "Bread, rye", "1_000", today())
            .unwrap()
            .clone();

        assert_eq!(record.len(), CATALOG_COLUMNS + 2);
        assert_eq!((record.field(0), record.name()), (Some("2"), Some("Bread, rye")));
        assert_eq!(record.field(MASS_COLUMN), Some("1000"));
        assert_eq!(record.field(DATE_COLUMN), Some("2026-10-16"));
        assert_eq!(selection.batch().len(), 1);
    }

    #[test]
    fn empty_name_wins_over_bad_mass() {
        let (catalog, index) = fixture();
        let mut selection = SelectionController::new();
        assert_eq!(
            selection.add(&catalog, &index, "", "abc", today()).unwrap_err(),
            ValidationError::NoNameInput
        );
        assert_eq!(
            selection.add(&catalog, &index, "", "", today()).unwrap_err(),
            ValidationError::NoNameInput
        );
    }

    #[test]
    fn unknown_name_wins_over_mass_errors() {
        let (catalog, index) = fixture();
        let mut selection = SelectionController::new();
        for mass in ["150", "", "-1"] {
            assert_eq!(
                selection.add(&catalog, &index, "apple", mass, today()).unwrap_err(),
                ValidationError::NameNotFound
            );
        }
    }

    #[test]
    fn mass_errors_leave_batch_untouched() {
        let (catalog, index) = fixture();
        let mut selection = SelectionController::new();
        selection.add(&catalog, &index, "Apple", "50", today()).unwrap();

        assert_eq!(
            selection.add(&catalog, &index, "Apple", "", today()).unwrap_err(),
            ValidationError::NoMassInput
        );
        assert_eq!(
            selection.add(&catalog, &index, "Apple", "0", today()).unwrap_err(),
            ValidationError::InvalidMass
        );
        assert_eq!(selection.batch().len(), 1);
    }

    #[test]
    fn rows_keep_their_own_selection_date() {
        let (catalog, index) = fixture();
        let mut selection = SelectionController::new();
        let tomorrow = today().succ_opt().unwrap();

        selection.add(&catalog, &index, "Apple", "10", today()).unwrap();
        selection.add(&catalog, &index, "Apple", "20", tomorrow).unwrap();

        let dates: Vec<_> = selection
            .batch()
            .rows()
            .iter()
            .map(|row| row.date_field().unwrap().to_string())
            .collect();
        assert_eq!(dates, vec!["2026-10-16", "2026-10-17"]);
    }

    #[test]
    fn clear_reports_already_empty() {
        let (catalog, index) = fixture();
        let mut selection = SelectionController::new();
        assert_eq!(selection.clear(), ClearOutcome::AlreadyEmpty);

        selection.add(&catalog, &index, "Apple", "10", today()).unwrap();
        selection.add(&catalog, &index, "Apple", "10", today()).unwrap();
        assert_eq!(selection.clear(), ClearOutcome::Cleared(2));
        assert!(selection.batch().is_empty());
    }

    #[test]
    fn save_clears_batch_only_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("SourceDB.csv"), dir.path().join("RecordDB.csv"));
        let (catalog, index) = fixture();
        let mut selection = SelectionController::new();

        assert_eq!(
            selection.save(&db, catalog.header()).unwrap(),
            SaveOutcome::NoItemsToSave
        );

        selection.add(&catalog, &index, "Apple", "10", today()).unwrap();
        assert_eq!(selection.save(&db, catalog.header()).unwrap(), SaveOutcome::Saved(1));
        assert!(selection.batch().is_empty());

        let blocked = Database::new(
            dir.path().join("SourceDB.csv"),
            dir.path().join("RecordDB.csv").join("not-a-dir.csv"),
        );
        selection.add(&catalog, &index, "Apple", "10", today()).unwrap();
        assert!(selection.save(&blocked, catalog.header()).is_err());
        assert_eq!(selection.batch().len(), 1);
    }
}
