use serde::Serialize;

use crate::db::RecordRow;

/// Records chosen in the running session that have not been saved yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionBatch {
    rows: Vec<RecordRow>,
}

impl SelectionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: RecordRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[RecordRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop every row and report how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.rows.len();
        self.rows.clear();
        count
    }
}
