//! `paygrid-engine` turns raw timesheet grids into analyzable records.
//!
//! The pipeline: a decoding collaborator produces a raw cell grid, the
//! segmenter splits it into sentinel-delimited sections (memoized per sheet
//! by [`SheetCache`]), and the two read-side analyses derive duplicate
//! findings and payroll summaries from the segmented sections.
//!
//! All operations are synchronous and run to completion; a caller that wants
//! to abandon an in-flight computation simply drops the result.

mod cache;
mod duplicates;
mod group;
mod salary;
mod segment;

pub use cache::{select_sheet, SelectSheetError, SheetCache, SheetId, SheetSource};
pub use duplicates::{find_duplicates, DuplicateFinding};
pub use salary::{compute_salary, SalaryRecord, SectionShare};
pub use segment::{segment_rows, segment_to_dataset, SegmentError, SegmentSummary, Segmentation};
