//! Consumption record models.
//!
//! A record is a catalog row extended with the eaten mass (grams) and the
//! date the item was selected. The record log keeps file order, which is the
//! order of saves, not necessarily date order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CatalogRow, DATE_COLUMN, DATE_HEADER, MASS_COLUMN, MASS_HEADER, NAME_COLUMN};

/// Date format of the `Date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One record line, header or data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordRow {
    fields: Vec<String>,
}

impl RecordRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Catalog fields followed by the mass and the ISO-8601 date.
    pub fn compose(food: &CatalogRow, mass_grams: u32, date: NaiveDate) -> Self {
        let mut fields = food.fields().to_vec();
        fields.push(mass_grams.to_string());
        fields.push(date.format(DATE_FORMAT).to_string());
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.field(NAME_COLUMN)
    }

    pub fn mass_field(&self) -> Option<&str> {
        self.field(MASS_COLUMN)
    }

    /// Raw `Date` column, compared verbatim when grouping by day.
    pub fn date_field(&self) -> Option<&str> {
        self.field(DATE_COLUMN)
    }

    pub fn mass_grams(&self) -> Option<u32> {
        self.mass_field()?.parse().ok()
    }
}

/// Header of the record file derived from the catalog header.
pub fn record_header(catalog_header: &CatalogRow) -> RecordRow {
    let mut fields = catalog_header.fields().to_vec();
    fields.push(MASS_HEADER.to_string());
    fields.push(DATE_HEADER.to_string());
    RecordRow::new(fields)
}

/// Record file contents, header at index 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordLog {
    rows: Vec<RecordRow>,
}

impl RecordLog {
    pub fn from_rows(rows: Vec<RecordRow>) -> Option<Self> {
        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }

    pub fn header(&self) -> &RecordRow {
        &self.rows[0]
    }

    pub fn rows(&self) -> &[RecordRow] {
        &self.rows
    }

    /// Records without the header, in file order.
    pub fn data_rows(&self) -> &[RecordRow] {
        &self.rows[1..]
    }

    pub fn has_no_data(&self) -> bool {
        self.data_rows().is_empty()
    }

    /// `Date` of the last line in the file, not the latest date.
    pub fn last_date(&self) -> Option<&str> {
        self.data_rows().last()?.date_field()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn compose_appends_mass_and_date() {
        let food = CatalogRow::new(strings(&["7", "9", "Apple", "0.3"]));
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let record = RecordRow::compose(&food, 150, date);
        assert_eq!(
            record.fields(),
            strings(&["7", "9", "Apple", "0.3", "150", "2026-01-05"]).as_slice()
        );
    }

    #[test]
    fn header_gets_mass_and_date_titles() {
        let header = CatalogRow::new(strings(&["id", "grp", "Food name"]));
        let derived = record_header(&header);
        assert_eq!(
            derived.fields(),
            strings(&["id", "grp", "Food name", "Mass (g)", "Date"]).as_slice()
        );
    }

    #[test]
    fn last_date_is_positional() {
        let mut late = vec![String::new(); MASS_COLUMN];
        late.extend(strings(&["10", "2026-03-02"]));
        let mut early = vec![String::new(); MASS_COLUMN];
        early.extend(strings(&["20", "2026-03-01"]));

        let log = RecordLog::from_rows(vec![
            RecordRow::new(vec![String::new(); DATE_COLUMN + 1]),
            RecordRow::new(late),
            RecordRow::new(early),
        ])
        .unwrap();

        assert_eq!(log.last_date(), Some("2026-03-01"));
        assert_eq!(log.data_rows()[0].mass_grams(), Some(10));
        assert_eq!(log.data_rows()[0].date_field(), Some("2026-03-02"));
    }

    #[test]
    fn header_only_log_has_no_data() {
        let log = RecordLog::from_rows(vec![RecordRow::new(strings(&["id", "Date"]))]).unwrap();
        assert!(log.has_no_data());
        assert_eq!(log.rows().len(), 1);
        assert_eq!(log.last_date(), None);
    }
}
