use paygrid_model::{ColumnId, Section};
use serde::{Deserialize, Serialize};

use crate::group::group_rows_by_key;

/// A cross-section write conflict: more than one row sharing `key` populated
/// the same monitored column.
///
/// Zero or one populated row is not a finding; this is a conflict
/// indicator, not a presence indicator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateFinding {
    pub key: String,
    pub column: ColumnId,
    /// Distinct titles of the sections that wrote the cell, in
    /// first-appearance order.
    pub sections: Vec<String>,
}

/// Scan segmented sections for keys whose monitored columns
/// (`col4..=col34`) are populated by more than one row.
///
/// Findings are ordered by key first-appearance, then ascending column.
/// Columns outside the monitored range are never inspected.
pub fn find_duplicates(sections: &[Section]) -> Vec<DuplicateFinding> {
    let mut findings = Vec::new();

    for (key, rows) in group_rows_by_key(sections) {
        for column in ColumnId::monitored() {
            let populated: Vec<&str> = rows
                .iter()
                .filter(|tagged| tagged.row.is_populated(column))
                .map(|tagged| tagged.section)
                .collect();
            if populated.len() < 2 {
                continue;
            }

            let mut titles: Vec<String> = Vec::new();
            for section in populated {
                if !titles.iter().any(|t| t == section) {
                    titles.push(section.to_string());
                }
            }
            findings.push(DuplicateFinding {
                key: key.clone(),
                column,
                sections: titles,
            });
        }
    }

    findings
}
