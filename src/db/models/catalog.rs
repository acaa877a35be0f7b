//! Catalog data models.
//!
//! The catalog is the read-only table of foods. Row 0 is the header; every
//! other row carries one food with its per-100g nutrient amounts.

use serde::{Deserialize, Serialize};

use super::{ID_COLUMN, NAME_COLUMN};

/// One catalog line, header or data, as an ordered list of raw fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogRow {
    fields: Vec<String>,
}

impl CatalogRow {
    pub fn new(fields: Vec<String>) -> Self {
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

    pub fn id(&self) -> Option<&str> {
        self.field(ID_COLUMN)
    }

    pub fn name(&self) -> Option<&str> {
        self.field(NAME_COLUMN)
    }
}

impl From<Vec<String>> for CatalogRow {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

/// Loaded catalog, header included at index 0. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

impl Catalog {
    /// Build a catalog from rows in file order. Returns `None` without a header row.
    pub fn from_rows(rows: Vec<CatalogRow>) -> Option<Self> {
        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }

    pub fn header(&self) -> &CatalogRow {
        &self.rows[0]
    }

    /// Row at `index` in the full sequence (0 is the header).
    pub fn row(&self, index: usize) -> Option<&CatalogRow> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn data_rows(&self) -> &[CatalogRow] {
        &self.rows[1..]
    }

    /// True for a catalog that holds a header and no foods.
    pub fn has_no_data(&self) -> bool {
        self.data_rows().is_empty()
    }
}

/// Food names paired with their catalog row index, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    entries: Vec<(String, usize)>,
}

impl NameIndex {
    /// Scan the data rows; the stored index points into `Catalog::row`.
    pub fn build(catalog: &Catalog) -> Self {
        let entries = catalog
            .rows()
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(index, row)| row.name().map(|name| (name.to_string(), index)))
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive lookup. The first matching row wins.
    pub fn find(&self, query: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == query)
            .map(|(_, index)| *index)
    }

    /// Names containing `text` (case-insensitive), in catalog order.
    pub fn complete(&self, text: &str, limit: usize) -> Vec<&str> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }
}
