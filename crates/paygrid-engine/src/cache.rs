use std::collections::HashMap;
use std::sync::Arc;

use paygrid_model::{RawRow, Section};
use thiserror::Error;

use crate::segment::{segment_rows, SegmentError};

/// Index of a sheet within the open document.
pub type SheetId = usize;

/// Seam to the external spreadsheet-decoding collaborator.
///
/// Implementations hold an already-decoded document and hand out raw cell
/// grids; nothing in this crate parses spreadsheet formats.
pub trait SheetSource {
    /// Raw cell grid for a sheet, or `None` if the sheet does not exist.
    fn sheet_rows(&self, sheet: SheetId) -> Option<Vec<RawRow>>;
    /// Display name of a sheet, or `None` if the sheet does not exist.
    fn sheet_name(&self, sheet: SheetId) -> Option<String>;
}

#[derive(Debug, Error)]
pub enum SelectSheetError {
    #[error("sheet not found: {0}")]
    SheetNotFound(SheetId),
    #[error(transparent)]
    Segment(#[from] SegmentError),
    /// Segmentation completed but no row opened a section.
    #[error("no sections found in sheet {sheet:?}: no row has a sentinel value of 1")]
    NoSectionsFound { sheet: String },
}

/// Memo of segmented sheets for one open document.
///
/// Entries are `Arc`-shared and never updated in place; segmentation is
/// idempotent, so a hit returns the stored sections without recomputation.
/// Loading a new document invalidates the cache wholesale via
/// [`SheetCache::clear`]; there is no per-entry eviction.
#[derive(Debug, Default)]
pub struct SheetCache {
    entries: HashMap<SheetId, Arc<[Section]>>,
}

impl SheetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached sections for `sheet`, if present.
    pub fn get(&self, sheet: SheetId) -> Option<Arc<[Section]>> {
        self.entries.get(&sheet).cloned()
    }

    /// Store the segmentation result for `sheet`.
    pub fn insert(&mut self, sheet: SheetId, sections: Arc<[Section]>) {
        self.entries.insert(sheet, sections);
    }

    /// Drop every entry. Called when a new source document is loaded.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Externally visible entry point: segmented sections for `sheet`, served
/// from the cache when available.
///
/// A zero-section outcome is surfaced as [`SelectSheetError::NoSectionsFound`]
/// and is not cached; the operation is deterministic, so re-selection fails
/// identically without changed input.
pub fn select_sheet<S: SheetSource>(
    cache: &mut SheetCache,
    source: &S,
    sheet: SheetId,
) -> Result<Arc<[Section]>, SelectSheetError> {
    if let Some(hit) = cache.get(sheet) {
        log::debug!("sheet {sheet}: segmentation served from cache");
        return Ok(hit);
    }

    let rows = source
        .sheet_rows(sheet)
        .ok_or(SelectSheetError::SheetNotFound(sheet))?;
    let segmentation = segment_rows(&rows)?;
    if segmentation.sections.is_empty() {
        let name = source
            .sheet_name(sheet)
            .unwrap_or_else(|| format!("#{sheet}"));
        return Err(SelectSheetError::NoSectionsFound { sheet: name });
    }

    let entry: Arc<[Section]> = segmentation.sections.into();
    cache.insert(sheet, entry.clone());
    Ok(entry)
}
