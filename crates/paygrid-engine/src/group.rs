use std::collections::HashMap;

use paygrid_model::{Section, SheetRow};

/// A row tagged with the title of the section it came from.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TaggedRow<'a> {
    pub section: &'a str,
    pub row: &'a SheetRow,
}

/// Flatten all rows across all sections and group them by key.
///
/// Groups come out in first-appearance order of their key; rows within a
/// group keep flattened (section, then grid) order. Keys are not required to
/// be unique within a section, so a group can hold several rows from the
/// same section.
pub(crate) fn group_rows_by_key(sections: &[Section]) -> Vec<(String, Vec<TaggedRow<'_>>)> {
    let mut groups: Vec<(String, Vec<TaggedRow<'_>>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for section in sections {
        for row in &section.rows {
            let slot = match index.get(row.key.as_str()) {
                Some(&slot) => slot,
                None => {
                    index.insert(row.key.as_str(), groups.len());
                    groups.push((row.key.clone(), Vec::new()));
                    groups.len() - 1
                }
            };
            groups[slot].1.push(TaggedRow {
                section: &section.title,
                row,
            });
        }
    }

    groups
}
