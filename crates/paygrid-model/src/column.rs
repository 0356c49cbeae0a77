use core::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lowest data column: raw grid index 2 is `col3`.
const MIN_COLUMN: u32 = 3;

/// Identifier of a data column within a [`SheetRow`](crate::SheetRow).
///
/// Column numbers are 1-based spreadsheet ordinals, offset by one from the
/// 0-based raw grid index: raw index 2 is `col3`, raw index 3 is `col4`, and
/// so on. The sentinel column (raw index 0) and the key column (raw index 1)
/// never get a `ColumnId`: `col1`/`col2` do not exist.
///
/// The canonical text form is `col{n}`, which is also the serde
/// representation so sparse rows serialize as `{"col7": ...}` entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ColumnId(u32);

impl ColumnId {
    /// First data column (`col3`, spreadsheet column C).
    pub const FIRST_DATA: ColumnId = ColumnId(3);
    /// Last column walked by tabular exporters (`col51`, spreadsheet AY).
    pub const LAST_EXPORTED: ColumnId = ColumnId(51);

    /// First column of the monitored range (`col4`, spreadsheet D).
    pub const MONITORED_FIRST: ColumnId = ColumnId(4);
    /// Last column of the monitored range (`col34`, spreadsheet AH).
    pub const MONITORED_LAST: ColumnId = ColumnId(34);

    /// BHXH summary column (`col48`, spreadsheet AV).
    pub const BHXH: ColumnId = ColumnId(48);
    /// CC summary column (`col49`, spreadsheet AW).
    pub const CC: ColumnId = ColumnId(49);
    /// Salary summary column (`col50`, spreadsheet AX).
    pub const SALARY: ColumnId = ColumnId(50);

    /// Construct from a 1-based spreadsheet column number.
    #[inline]
    pub fn new(number: u32) -> Self {
        assert!(number >= MIN_COLUMN, "column number below col3: {number}");
        Self(number)
    }

    /// Construct from a 0-based raw grid index (must be a data column, >= 2).
    #[inline]
    pub fn from_raw_index(index: usize) -> Self {
        assert!(index >= 2, "raw index {index} is not a data column");
        Self(index as u32 + 1)
    }

    /// 1-based spreadsheet column number.
    #[inline]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// 0-based index of this column in a raw grid row.
    #[inline]
    pub const fn raw_index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The monitored range inspected by duplicate detection and categorical
    /// tallies: `col4..=col34` (spreadsheet D through AH).
    pub fn monitored() -> impl Iterator<Item = ColumnId> {
        (Self::MONITORED_FIRST.0..=Self::MONITORED_LAST.0).map(ColumnId)
    }

    /// The summary columns carrying numeric payroll totals (AV, AW, AX).
    pub const fn summary() -> [ColumnId; 3] {
        [Self::BHXH, Self::CC, Self::SALARY]
    }

    /// Excel-style letters for this column (`col4` -> `D`, `col34` -> `AH`).
    pub fn excel_letters(self) -> String {
        let mut n = self.0;
        let mut out = Vec::<u8>::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            out.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        out.reverse();
        String::from_utf8(out).expect("column letters are always valid UTF-8")
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col{}", self.0)
    }
}

/// Errors that can occur when parsing a `col{n}` identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColumnIdParseError {
    MissingPrefix,
    InvalidNumber,
    BelowFirstDataColumn,
}

impl fmt::Display for ColumnIdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ColumnIdParseError::MissingPrefix => "column identifier must start with `col`",
            ColumnIdParseError::InvalidNumber => "invalid number in column identifier",
            ColumnIdParseError::BelowFirstDataColumn => "column identifiers start at col3",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ColumnIdParseError {}

impl FromStr for ColumnId {
    type Err = ColumnIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("col").ok_or(ColumnIdParseError::MissingPrefix)?;
        let number: u32 = digits.parse().map_err(|_| ColumnIdParseError::InvalidNumber)?;
        if number < MIN_COLUMN {
            return Err(ColumnIdParseError::BelowFirstDataColumn);
        }
        Ok(ColumnId(number))
    }
}

impl Serialize for ColumnId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColumnId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
