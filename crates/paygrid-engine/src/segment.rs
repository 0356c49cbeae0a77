use paygrid_model::{CellValue, ColumnId, Dataset, RawRow, Section, SheetRow};
use serde::Serialize;
use thiserror::Error;

/// Sentinel value that opens a new section. Other numeric sentinels never
/// do, even when they restart a numbering sequence.
const SECTION_START: f64 = 1.0;

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("grid must contain at least a header row and one data row ({rows} non-blank rows found)")]
    InsufficientData { rows: usize },
}

/// Outcome of a segmentation scan.
#[derive(Clone, Debug, PartialEq)]
pub struct Segmentation {
    /// Sections in discovery order. May be empty: a grid with no sentinel-1
    /// row segments successfully to zero sections, and the selection
    /// boundary decides whether that is an error.
    pub sections: Vec<Section>,
    pub summary: SegmentSummary,
}

/// Scan diagnostics. Skipped rows are deliberate, not failures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSummary {
    /// Rows in the raw grid, including skipped ones.
    pub total_rows: usize,
    /// Rows whose every cell was blank.
    pub blank_rows: usize,
    /// Rows whose sentinel cell did not parse as a number.
    pub non_numeric_rows: usize,
    /// Numbered rows seen before any section was open.
    pub dropped_leading_rows: usize,
}

/// Split a raw grid into sentinel-delimited sections.
///
/// The sentinel cell (column 0) is read as trimmed text; rows where it does
/// not parse as a number contribute nothing. A sentinel of exactly 1 closes
/// the open section (if any) and opens a new one; every numbered row,
/// including the one that opened the section, is appended to the section
/// currently open.
pub fn segment_rows(rows: &[RawRow]) -> Result<Segmentation, SegmentError> {
    let usable = rows.iter().filter(|row| !is_blank_row(row)).count();
    if usable < 2 {
        return Err(SegmentError::InsufficientData { rows: usable });
    }

    let mut summary = SegmentSummary {
        total_rows: rows.len(),
        ..SegmentSummary::default()
    };
    let mut sections: Vec<Section> = Vec::new();
    let mut open: Option<Section> = None;
    let mut next_ordinal: usize = 1;

    for (index, row) in rows.iter().enumerate() {
        let grid_row = index as u32 + 1;

        if is_blank_row(row) {
            summary.blank_rows += 1;
            log::debug!("row {grid_row}: blank, skipped");
            continue;
        }

        let sentinel = match row.first().and_then(CellValue::as_number) {
            Some(value) => value,
            None => {
                summary.non_numeric_rows += 1;
                log::debug!("row {grid_row}: non-numeric sentinel, skipped");
                continue;
            }
        };

        if sentinel == SECTION_START {
            if let Some(done) = open.take() {
                sections.push(done);
            }
            open = Some(Section::new(section_title(next_ordinal), grid_row));
            next_ordinal += 1;
        }

        match open.as_mut() {
            Some(section) => section.rows.push(build_row(row, sentinel)),
            None => {
                summary.dropped_leading_rows += 1;
                log::warn!("row {grid_row}: numbered row before any section, dropped");
            }
        }
    }

    if let Some(done) = open.take() {
        sections.push(done);
    }

    Ok(Segmentation { sections, summary })
}

/// Segment a grid and wrap the result in a [`Dataset`] with fresh metadata.
pub fn segment_to_dataset(
    rows: &[RawRow],
    source: impl Into<String>,
) -> Result<Dataset, SegmentError> {
    let segmentation = segment_rows(rows)?;
    Ok(Dataset::from_sections(segmentation.sections, source))
}

/// Section titles are a pure function of the discovery ordinal; the
/// originating grid row is carried separately as [`Section::start_row`].
fn section_title(ordinal: usize) -> String {
    format!("Section {ordinal}")
}

fn is_blank_row(row: &RawRow) -> bool {
    row.iter().all(CellValue::is_blank)
}

fn build_row(row: &RawRow, sequence_number: f64) -> SheetRow {
    let key = row
        .get(1)
        .map(|cell| cell.display_text().into_owned())
        .unwrap_or_default();

    let mut out = SheetRow::new(sequence_number, key);
    for (index, value) in row.iter().enumerate().skip(2) {
        if !value.is_blank() {
            out.set_cell(ColumnId::from_raw_index(index), value.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::from(s)
    }

    fn num(n: f64) -> CellValue {
        CellValue::from(n)
    }

    #[test]
    fn sentinel_text_is_trimmed_before_parsing() {
        let rows = vec![
            vec![text("STT"), text("Key")],
            vec![text(" 1 "), text("K1"), text("v")],
        ];
        let segmentation = segment_rows(&rows).unwrap();
        assert_eq!(segmentation.sections.len(), 1);
        assert_eq!(segmentation.sections[0].rows[0].sequence_number, 1.0);
    }

    #[test]
    fn numbered_rows_before_first_section_are_dropped() {
        let rows = vec![
            vec![text("STT"), text("Key")],
            vec![num(2.0), text("early"), text("x")],
            vec![num(1.0), text("K1"), text("v")],
        ];
        let segmentation = segment_rows(&rows).unwrap();
        assert_eq!(segmentation.sections.len(), 1);
        assert_eq!(segmentation.sections[0].rows.len(), 1);
        assert_eq!(segmentation.sections[0].rows[0].key, "K1");
        assert_eq!(segmentation.summary.dropped_leading_rows, 1);
    }

    #[test]
    fn only_the_literal_one_starts_a_section() {
        // A restarted numbering sequence that never hits 1 opens nothing.
        let rows = vec![
            vec![text("STT"), text("Key")],
            vec![num(2.0), text("A")],
            vec![num(3.0), text("B")],
            vec![num(2.0), text("C")],
        ];
        let segmentation = segment_rows(&rows).unwrap();
        assert!(segmentation.sections.is_empty());
        assert_eq!(segmentation.summary.dropped_leading_rows, 3);
    }

    #[test]
    fn summary_counts_each_skip_kind() {
        let rows = vec![
            vec![CellValue::Empty, CellValue::Empty],
            vec![text("STT"), text("Key")],
            vec![num(1.0), text("K1"), text("v")],
            vec![text(""), text("")],
        ];
        let segmentation = segment_rows(&rows).unwrap();
        assert_eq!(segmentation.summary.total_rows, 4);
        assert_eq!(segmentation.summary.blank_rows, 2);
        assert_eq!(segmentation.summary.non_numeric_rows, 1);
        assert_eq!(segmentation.summary.dropped_leading_rows, 0);
    }

    #[test]
    fn section_title_depends_only_on_ordinal() {
        assert_eq!(section_title(1), "Section 1");
        assert_eq!(section_title(12), "Section 12");
    }

    #[test]
    fn start_row_records_the_sentinel_row() {
        let rows = vec![
            vec![text("STT"), text("Key")],
            vec![CellValue::Empty],
            vec![num(1.0), text("K1"), text("v")],
        ];
        let segmentation = segment_rows(&rows).unwrap();
        assert_eq!(segmentation.sections[0].start_row, 3);
    }

    #[test]
    fn fewer_than_two_usable_rows_is_an_error() {
        let rows = vec![
            vec![text("STT"), text("Key")],
            vec![CellValue::Empty, text("")],
        ];
        let err = segment_rows(&rows).unwrap_err();
        assert!(matches!(err, SegmentError::InsufficientData { rows: 1 }));
    }
}
