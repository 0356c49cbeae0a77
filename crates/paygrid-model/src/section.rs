use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SheetRow;

fn default_collapsed() -> bool {
    true
}

/// A contiguous, sentinel-delimited run of rows treated as one logical group.
///
/// Each row belongs to exactly one section; rows keep their original grid
/// order and sections keep their discovery order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Display title, derived from the section's discovery ordinal.
    pub title: String,
    /// 1-based grid row of the sentinel row that opened this section.
    pub start_row: u32,
    /// Member rows, in grid order.
    pub rows: Vec<SheetRow>,
    /// Viewer hint; freshly segmented sections start collapsed.
    #[serde(default = "default_collapsed")]
    pub collapsed: bool,
}

impl Section {
    /// Create an empty section.
    pub fn new(title: impl Into<String>, start_row: u32) -> Self {
        Self {
            title: title.into(),
            start_row,
            rows: Vec::new(),
            collapsed: true,
        }
    }
}

/// A fully segmented sheet plus derived metadata.
///
/// Rebuilt wholesale on every successful segmentation and never mutated in
/// place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub sections: Vec<Section>,
    pub metadata: DatasetMeta,
}

/// Summary metadata derived from a [`Dataset`]'s sections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMeta {
    /// Name of the sheet (or file) the grid came from.
    pub source: String,
    /// Total row count across all sections.
    pub total_rows: usize,
    /// Section count.
    pub total_sections: usize,
    /// When this dataset was computed.
    pub last_updated: DateTime<Utc>,
}

impl Dataset {
    /// Build a dataset from segmented sections, computing the metadata.
    pub fn from_sections(sections: Vec<Section>, source: impl Into<String>) -> Self {
        let total_rows = sections.iter().map(|s| s.rows.len()).sum();
        let total_sections = sections.len();
        Self {
            sections,
            metadata: DatasetMeta {
                source: source.into(),
                total_rows,
                total_sections,
                last_updated: Utc::now(),
            },
        }
    }

    /// All rows across all sections, flattened in section order.
    pub fn all_rows(&self) -> impl Iterator<Item = &SheetRow> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn section_with_rows(title: &str, start_row: u32, keys: &[&str]) -> Section {
        let mut section = Section::new(title, start_row);
        for (i, key) in keys.iter().enumerate() {
            section.rows.push(SheetRow::new(i as f64 + 1.0, *key));
        }
        section
    }

    #[test]
    fn metadata_is_derived_from_sections() {
        let dataset = Dataset::from_sections(
            vec![
                section_with_rows("Section 1", 2, &["A", "B"]),
                section_with_rows("Section 2", 5, &["C"]),
            ],
            "Sheet1",
        );

        assert_eq!(dataset.metadata.source, "Sheet1");
        assert_eq!(dataset.metadata.total_rows, 3);
        assert_eq!(dataset.metadata.total_sections, 2);

        let keys: Vec<&str> = dataset.all_rows().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn collapsed_defaults_to_true_on_deserialize() {
        let json = serde_json::json!({
            "title": "Section 1",
            "startRow": 2,
            "rows": [],
        });
        let section: Section = serde_json::from_value(json).unwrap();
        assert!(section.collapsed);
    }
}
