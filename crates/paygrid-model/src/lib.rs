//! `paygrid-model` defines the core in-memory timesheet grid data structures.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the analysis engine (segmentation, duplicate detection, payroll tallies)
//! - export layers via `serde` (JSON-safe schema)
//!
//! Spreadsheet decoding is a separate collaborator: everything here starts
//! from an already-resident rectangular grid of [`CellValue`]s.

mod column;
mod row;
mod section;
mod value;

pub use column::{ColumnId, ColumnIdParseError};
pub use row::{RawRow, SheetRow};
pub use section::{Dataset, DatasetMeta, Section};
pub use value::CellValue;
