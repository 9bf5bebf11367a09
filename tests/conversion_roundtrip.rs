use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use smartcode::data::ReportEntry;
use smartcode::{ConvertError, convert_file};
use tempfile::tempdir;

fn sample_collection() -> Value {
    json!([
        {
            "id": "P-001",
            "category": "โคมไฟตั้งโต๊ะ",
            "color": "ทอง, แดง",
            "length": "45cm",
            "width": "20",
            "height": "",
            "baseCode": "TL-102",
            "price": 1290,
            "note": "ของแถมไม่รวม",
        },
        {
            "id": "P-002",
            "category": "โคมไฟระย้า",
            "color": "โครเมี่ยม",
            "length": 60,
            "width": 60,
            "height": 45.5,
            "baseCode": "AA-7",
        },
        {
            "id": "P-003",
            "category": "ตู้โชว์",
            "color": "",
            "baseCode": "xyz",
        },
    ])
}

fn run_convert(dir: &Path, input: Value) -> (Vec<Value>, Vec<ReportEntry>) {
    let input_path = dir.join("products_data_v2.json");
    let output_path = dir.join("products_data_v3.json");
    let report_path = dir.join("conversion_report.json");
    fs::write(&input_path, serde_json::to_vec_pretty(&input).unwrap()).unwrap();

    convert_file(&input_path, &output_path, &report_path).unwrap();

    let records: Vec<Value> =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    let report: Vec<ReportEntry> =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    (records, report)
}

#[test]
fn convert_file_rewrites_ids_and_writes_both_artifacts() {
    let temp = tempdir().unwrap();
    let (records, report) = run_convert(temp.path(), sample_collection());

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["id"], json!("TL102-GLD-45-20-00"));
    assert_eq!(records[0]["oldId"], json!("P-001"));
    assert_eq!(records[1]["id"], json!("AA7-CHR-60-60-45"));
    // Unknown category and digit-free base code degrade to sentinels.
    assert_eq!(records[2]["id"], json!("OT000-XXX-00-00-00"));

    assert_eq!(report.len(), 3);
    assert_eq!(report[1].new_id, "AA7-CHR-60-60-45");
    assert_eq!(report[1].dimensions, "60x60x45.5");
}

#[test]
fn convert_file_passes_unrecognized_fields_through() {
    let temp = tempdir().unwrap();
    let (records, _) = run_convert(temp.path(), sample_collection());

    assert_eq!(records[0]["price"], json!(1290));
    assert_eq!(records[0]["note"], json!("ของแถมไม่รวม"));
    // Numeric dimension values come back with their original type.
    assert_eq!(records[1]["length"], json!(60));
    assert_eq!(records[1]["height"], json!(45.5));
    // Fields absent from the input stay absent.
    assert!(records[2].get("length").is_none());
}

#[test]
fn report_numbering_is_strictly_sequential() {
    let temp = tempdir().unwrap();
    let many: Vec<Value> = (0..120)
        .map(|i| json!({"id": format!("P-{i:03}"), "category": "โคมไฟห้อย"}))
        .collect();
    let (_, report) = run_convert(temp.path(), Value::Array(many));

    assert_eq!(report.len(), 120);
    for (idx, entry) in report.iter().enumerate() {
        assert_eq!(entry.no, idx + 1);
    }
}

#[test]
fn reapplying_converter_keeps_code_but_clobbers_old_id() {
    let temp = tempdir().unwrap();
    let (first_pass, _) = run_convert(temp.path(), sample_collection());

    // Second pass over the converter's own output. The code is a function
    // of category/color/dimensions/baseCode only, none of which the first
    // pass touched, so the id is reproduced; the original id in oldId is
    // lost, overwritten by the composite code.
    let second_dir = tempdir().unwrap();
    let (second_pass, report) = run_convert(second_dir.path(), Value::Array(first_pass.clone()));

    for (first, second) in first_pass.iter().zip(&second_pass) {
        assert_eq!(first["id"], second["id"]);
        assert_eq!(second["oldId"], first["id"]);
    }
    assert_eq!(report[0].old_id, "TL102-GLD-45-20-00");
}

#[test]
fn malformed_top_level_input_is_a_structural_error() {
    let temp = tempdir().unwrap();
    let input_path = temp.path().join("broken.json");
    fs::write(&input_path, "{not json").unwrap();

    let err = convert_file(
        &input_path,
        &temp.path().join("out.json"),
        &temp.path().join("report.json"),
    )
    .unwrap_err();

    assert!(matches!(err, ConvertError::Parse { .. }));
    // No partial output.
    assert!(!temp.path().join("out.json").exists());
    assert!(!temp.path().join("report.json").exists());
}

#[test]
fn missing_input_file_is_an_io_error() {
    let temp = tempdir().unwrap();
    let err = convert_file(
        &temp.path().join("absent.json"),
        &temp.path().join("out.json"),
        &temp.path().join("report.json"),
    )
    .unwrap_err();
    assert!(matches!(err, ConvertError::Io(_)));
}
