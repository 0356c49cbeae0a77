use paygrid_model::{CellValue, ColumnId, Dataset, Section, SheetRow};
use pretty_assertions::assert_eq;

#[test]
fn dataset_serializes_with_camel_case_metadata() {
    let mut section = Section::new("Section 1", 2);
    let mut row = SheetRow::new(1.0, "K1");
    row.set_cell(ColumnId::new(4), CellValue::from("NL"));
    section.rows.push(row);

    let dataset = Dataset::from_sections(vec![section], "Sheet1");
    let json = serde_json::to_value(&dataset).unwrap();

    assert_eq!(json["metadata"]["source"], "Sheet1");
    assert_eq!(json["metadata"]["totalRows"], 1);
    assert_eq!(json["metadata"]["totalSections"], 1);
    assert!(json["metadata"]["lastUpdated"].is_string());

    let section = &json["sections"][0];
    assert_eq!(section["title"], "Section 1");
    assert_eq!(section["startRow"], 2);
    assert_eq!(section["collapsed"], true);
    assert_eq!(section["rows"][0]["sequenceNumber"], 1.0);
    assert_eq!(section["rows"][0]["col4"]["value"], "NL");
}

#[test]
fn dataset_roundtrips_through_json() {
    let mut section = Section::new("Section 1", 2);
    let mut row = SheetRow::new(2.0, "K2");
    row.set_cell(ColumnId::new(3), CellValue::from("c"));
    row.set_cell(ColumnId::new(48), CellValue::from(1250.5));
    section.rows.push(row);
    section.collapsed = false;

    let dataset = Dataset::from_sections(vec![section], "Sheet2");
    let json = serde_json::to_string(&dataset).unwrap();
    let back: Dataset = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dataset);
}

#[test]
fn exporters_can_walk_data_columns_in_order() {
    // CSV export walks col3..col51; the sparse map must iterate ascending.
    let mut row = SheetRow::new(1.0, "K");
    row.set_cell(ColumnId::LAST_EXPORTED, CellValue::from("last"));
    row.set_cell(ColumnId::FIRST_DATA, CellValue::from("first"));
    row.set_cell(ColumnId::new(34), CellValue::from("mid"));

    let walked: Vec<String> = row.cells.keys().map(|c| c.to_string()).collect();
    assert_eq!(walked, vec!["col3", "col34", "col51"]);
}
