//! CSV rendering and export of conversion reports.
//!
//! The CSV is written for spreadsheet consumption: UTF-8 with a BOM so
//! Thai text is detected, and a trailing empty price column that gets
//! filled in manually after export.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::constants::report::{CSV_HEADER, DIMENSION_SEPARATOR, UTF8_BOM};
use crate::data::ReportEntry;
use crate::errors::ConvertError;

/// Split a dimension summary (`{length}x{width}x{height}`) back into its
/// three parts. Missing parts come back empty; anything past the third
/// separator is ignored.
pub fn split_dimensions(summary: &str) -> [&str; 3] {
    let mut parts = summary.split(DIMENSION_SEPARATOR);
    [
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    ]
}

/// Render report entries as CSV: the header row, then one row per entry
/// with the dimension summary split into separate columns and an empty
/// trailing price column.
pub fn render_csv(entries: &[ReportEntry]) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER.iter().copied());
    for entry in entries {
        let no = entry.no.to_string();
        let [length, width, height] = split_dimensions(&entry.dimensions);
        push_row(
            &mut out,
            [
                no.as_str(),
                &entry.old_id,
                &entry.new_id,
                &entry.category,
                &entry.color,
                length,
                width,
                height,
                "",
            ]
            .into_iter(),
        );
    }
    out
}

/// Read a conversion report and write its CSV rendering, prefixed with
/// a UTF-8 BOM. Returns the number of data rows written.
pub fn export_csv_file(report_path: &Path, csv_path: &Path) -> Result<usize, ConvertError> {
    let raw = fs::read_to_string(report_path)?;
    let entries: Vec<ReportEntry> =
        serde_json::from_str(&raw).map_err(|source| ConvertError::Parse {
            path: report_path.display().to_string(),
            source,
        })?;

    let mut contents = String::from(UTF8_BOM);
    contents.push_str(&render_csv(&entries));
    fs::write(csv_path, contents)?;
    info!(rows = entries.len(), csv = %csv_path.display(), "csv report written");
    Ok(entries.len())
}

fn push_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        write_field(out, field);
        first = false;
    }
    out.push('\n');
}

/// Minimal CSV quoting: fields containing a comma, quote, or line break
/// are wrapped in quotes with inner quotes doubled, everything else is
/// written verbatim.
fn write_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        for ch in field.chars() {
            if ch == '"' {
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(no: usize, color: &str, dimensions: &str) -> ReportEntry {
        ReportEntry {
            no,
            old_id: format!("P-{no:03}"),
            new_id: "TL102-GLD-45-20-00".to_string(),
            category: "โคมไฟตั้งโต๊ะ".to_string(),
            color: color.to_string(),
            dimensions: dimensions.to_string(),
        }
    }

    #[test]
    fn split_dimensions_defaults_missing_parts() {
        assert_eq!(split_dimensions("45cmx20x"), ["45cm", "20", ""]);
        assert_eq!(split_dimensions("xx"), ["", "", ""]);
        assert_eq!(split_dimensions("45"), ["45", "", ""]);
        assert_eq!(split_dimensions("1x2x3x4"), ["1", "2", "3"]);
    }

    #[test]
    fn render_csv_emits_header_and_price_placeholder() {
        let csv = render_csv(&[entry(1, "ทอง", "45cmx20x")]);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ลำดับ,รหัสเดิม,รหัสใหม่,ประเภท,สี,ยาว,กว้าง,สูง,ราคา"
        );
        assert_eq!(
            lines.next().unwrap(),
            "1,P-001,TL102-GLD-45-20-00,โคมไฟตั้งโต๊ะ,ทอง,45cm,20,,"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn render_csv_quotes_fields_with_commas() {
        let csv = render_csv(&[entry(2, "ทอง, แดง", "xx")]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "2,P-002,TL102-GLD-45-20-00,โคมไฟตั้งโต๊ะ,\"ทอง, แดง\",,,,"
        );
    }

    #[test]
    fn render_csv_doubles_embedded_quotes() {
        let csv = render_csv(&[entry(3, "\"gold\"", "xx")]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"\"\"gold\"\"\""));
    }
}
