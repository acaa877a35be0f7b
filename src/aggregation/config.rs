use crate::db::models::{ID_COLUMN, MASS_COLUMN, NULL_SENTINEL};

/// Column 7 holds a non-numeric code in the catalog and is never summed.
const RESERVED_COLUMN: usize = 7;

/// Tunables for the daily nutrient aggregation.
#[derive(Debug, Clone)]
pub struct AggregationConfig {
    /// Column indices never treated as nutrients, even when they parse as numbers.
    pub skipped_columns: Vec<usize>,

    /// Field value standing for "unknown amount"; counted as zero.
    pub null_sentinel: String,

    /// Grams of retinol equivalent per million IU.
    pub iu_to_grams_factor: f64,
}

impl AggregationConfig {
    pub fn skips(&self, column: usize) -> bool {
        self.skipped_columns.contains(&column)
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            skipped_columns: vec![ID_COLUMN, RESERVED_COLUMN, MASS_COLUMN],
            null_sentinel: NULL_SENTINEL.to_string(),
            iu_to_grams_factor: 0.3,
        }
    }
}
