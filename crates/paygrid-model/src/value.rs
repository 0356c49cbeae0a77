use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Scalar value of a single grid cell.
///
/// The enum uses an explicit `{type, value}` tagged layout for stable export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// Absent / not provided.
    Empty,
    /// IEEE-754 double precision number.
    Number(f64),
    /// Plain text.
    Text(String),
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl CellValue {
    /// Returns true if the value is [`CellValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns true if the cell carries no data.
    ///
    /// Absence and the empty string are equivalent: a `Text("")` cell is as
    /// blank as a missing one. Whitespace-only text still counts as data.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Best-effort numeric reading.
    ///
    /// Text is trimmed and parsed; anything that does not parse yields `None`
    /// rather than an error.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    None
                } else {
                    t.parse().ok()
                }
            }
            CellValue::Empty => None,
        }
    }

    /// Text rendering of the value, as a grid viewer would show it.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Text(s) => Cow::Borrowed(s),
            CellValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blankness_treats_empty_text_as_absent() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::from("").is_blank());
        assert!(!CellValue::from(" ").is_blank());
        assert!(!CellValue::from(0.0).is_blank());
    }

    #[test]
    fn numeric_reading_is_best_effort() {
        assert_eq!(CellValue::from(2.5).as_number(), Some(2.5));
        assert_eq!(CellValue::from(" 17 ").as_number(), Some(17.0));
        assert_eq!(CellValue::from("1e3").as_number(), Some(1000.0));
        assert_eq!(CellValue::from("abc").as_number(), None);
        assert_eq!(CellValue::Empty.as_number(), None);
    }

    #[test]
    fn display_text_matches_grid_rendering() {
        assert_eq!(CellValue::from(1.0).display_text(), "1");
        assert_eq!(CellValue::from(1.5).display_text(), "1.5");
        assert_eq!(CellValue::from("TC").display_text(), "TC");
        assert_eq!(CellValue::Empty.display_text(), "");
    }

    #[test]
    fn tagged_serde_layout() {
        let json = serde_json::to_value(CellValue::from(3.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "number", "value": 3.0 }));

        let back: CellValue =
            serde_json::from_value(serde_json::json!({ "type": "text", "value": "NL" })).unwrap();
        assert_eq!(back, CellValue::from("NL"));
    }
}
