pub mod catalog;
pub mod record;

pub use catalog::{Catalog, CatalogRow, NameIndex};
pub use record::{record_header, RecordLog, RecordRow};

/// Fields per catalog line (header and data).
pub const CATALOG_COLUMNS: usize = 56;
/// Fields per record line: catalog fields plus mass and date.
pub const RECORD_COLUMNS: usize = CATALOG_COLUMNS + 2;

pub const ID_COLUMN: usize = 0;
/// The free-text food name; the only field written quoted.
pub const NAME_COLUMN: usize = 2;
pub const MASS_COLUMN: usize = CATALOG_COLUMNS;
pub const DATE_COLUMN: usize = CATALOG_COLUMNS + 1;

/// Placeholder for a nutrient amount the catalog does not know.
pub const NULL_SENTINEL: &str = "NULL";

pub const MASS_HEADER: &str = "Mass (g)";
pub const DATE_HEADER: &str = "Date";
