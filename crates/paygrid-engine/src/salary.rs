use std::collections::HashMap;

use paygrid_model::{CellValue, ColumnId, Section};
use serde::{Deserialize, Serialize};

use crate::group::{group_rows_by_key, TaggedRow};

/// Per-key payroll summary: categorical day tallies plus summary totals and
/// their per-section distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub key: String,
    /// `NL` markers across the monitored range.
    pub holiday_count: u32,
    /// `+` markers.
    pub normal_count: u32,
    /// `TC` markers.
    pub weekend_count: u32,
    /// Sum of populated numeric values in `col48` (AV).
    pub bhxh_total: f64,
    /// Sum of populated numeric values in `col49` (AW).
    pub cc_total: f64,
    /// Sum of populated numeric values in `col50` (AX).
    pub salary_total: f64,
    /// One entry per contributing section, in first-marker order.
    pub sections: Vec<SectionShare>,
}

/// A contributing section's slice of a [`SalaryRecord`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionShare {
    pub section: String,
    pub holiday_count: u32,
    pub normal_count: u32,
    pub weekend_count: u32,
    pub bhxh_share: f64,
    pub cc_share: f64,
    pub salary_share: f64,
}

impl SectionShare {
    fn new(section: &str) -> Self {
        Self {
            section: section.to_string(),
            holiday_count: 0,
            normal_count: 0,
            weekend_count: 0,
            bhxh_share: 0.0,
            cc_share: 0.0,
            salary_share: 0.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum DayMarker {
    Holiday,
    Normal,
    Weekend,
}

/// Categorical day markers, matched on trimmed uppercase text. Any other
/// populated value is ignored for counting but stays visible in the row
/// data.
fn classify_marker(cell: &CellValue) -> Option<DayMarker> {
    match cell.display_text().trim().to_uppercase().as_str() {
        "NL" => Some(DayMarker::Holiday),
        "+" => Some(DayMarker::Normal),
        "TC" => Some(DayMarker::Weekend),
        _ => None,
    }
}

/// Tally categorical markers and distribute summary totals per key.
///
/// Membership and totals are collected in one pass, then each final total is
/// divided by the final contributing-section count in a second, explicit
/// pass, so shares are never read from partially accumulated state. Record
/// order follows first-appearance order of keys.
pub fn compute_salary(sections: &[Section]) -> Vec<SalaryRecord> {
    group_rows_by_key(sections)
        .into_iter()
        .map(|(key, rows)| aggregate_key(key, &rows))
        .collect()
}

fn aggregate_key(key: String, rows: &[TaggedRow<'_>]) -> SalaryRecord {
    let mut record = SalaryRecord {
        key,
        holiday_count: 0,
        normal_count: 0,
        weekend_count: 0,
        bhxh_total: 0.0,
        cc_total: 0.0,
        salary_total: 0.0,
        sections: Vec::new(),
    };

    // Pass 1: marker tallies and contributing-section membership. A section
    // joins the breakdown only by contributing a categorical marker.
    let mut shares: Vec<SectionShare> = Vec::new();
    let mut share_index: HashMap<&str, usize> = HashMap::new();

    for tagged in rows {
        for column in ColumnId::monitored() {
            let Some(cell) = tagged.row.cell(column) else {
                continue;
            };
            let Some(marker) = classify_marker(cell) else {
                continue;
            };

            let slot = match share_index.get(tagged.section) {
                Some(&slot) => slot,
                None => {
                    share_index.insert(tagged.section, shares.len());
                    shares.push(SectionShare::new(tagged.section));
                    shares.len() - 1
                }
            };
            let share = &mut shares[slot];
            match marker {
                DayMarker::Holiday => {
                    record.holiday_count += 1;
                    share.holiday_count += 1;
                }
                DayMarker::Normal => {
                    record.normal_count += 1;
                    share.normal_count += 1;
                }
                DayMarker::Weekend => {
                    record.weekend_count += 1;
                    share.weekend_count += 1;
                }
            }
        }

        // Summary totals; non-numeric values are excluded, not errors.
        for (column, total) in [
            (ColumnId::BHXH, &mut record.bhxh_total),
            (ColumnId::CC, &mut record.cc_total),
            (ColumnId::SALARY, &mut record.salary_total),
        ] {
            if let Some(value) = tagged.row.cell(column).and_then(CellValue::as_number) {
                *total += value;
            }
        }
    }

    // Pass 2: distribute the final totals evenly across contributing
    // sections. With no contributing sections the totals stay on the record
    // and nothing is distributed.
    if !shares.is_empty() {
        let count = shares.len() as f64;
        for share in &mut shares {
            share.bhxh_share = record.bhxh_total / count;
            share.cc_share = record.cc_total / count;
            share.salary_share = record.salary_total / count;
        }
    }

    record.sections = shares;
    record
}
