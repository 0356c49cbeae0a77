use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CellValue, ColumnId};

/// One undifferentiated grid row as produced by the decoding collaborator.
///
/// Index 0 is the sentinel/sequence column, index 1 the key column, indices
/// >= 2 the data columns.
pub type RawRow = Vec<CellValue>;

/// A structured row derived from a [`RawRow`].
///
/// Data columns are stored sparsely: only populated cells get an entry, and
/// `col1`/`col2` never exist (the sentinel and key are promoted to fields).
/// The map is ordered by column so exporters can walk `col3..col51` in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRow {
    /// Parsed sentinel value (the sequence number within the section).
    pub sequence_number: f64,
    /// Grouping identifier from the key column; empty when absent.
    pub key: String,
    /// Populated data columns.
    #[serde(flatten)]
    pub cells: BTreeMap<ColumnId, CellValue>,
}

impl SheetRow {
    /// Create a row with no data columns.
    pub fn new(sequence_number: f64, key: impl Into<String>) -> Self {
        Self {
            sequence_number,
            key: key.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Store a data-column value. Blank values are not stored.
    pub fn set_cell(&mut self, column: ColumnId, value: CellValue) {
        if !value.is_blank() {
            self.cells.insert(column, value);
        }
    }

    /// The value stored in `column`, if populated.
    pub fn cell(&self, column: ColumnId) -> Option<&CellValue> {
        self.cells.get(&column)
    }

    /// Returns true if `column` holds data.
    ///
    /// Hand-built rows may contain blank entries, so presence alone is not
    /// enough.
    pub fn is_populated(&self, column: ColumnId) -> bool {
        self.cells.get(&column).is_some_and(|v| !v.is_blank())
    }
}
