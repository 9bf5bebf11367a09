//! Batch conversion driver and JSON file round trip.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::codes::smart_code;
use crate::constants::report::{DIMENSION_SEPARATOR, PROGRESS_INTERVAL};
use crate::data::{ProductRecord, ReportEntry, value_text};
use crate::errors::ConvertError;

/// Convert every record in place, strictly in input order.
///
/// Each record's `id` is replaced by the generated composite code and
/// the prior value moves to `oldId`. Returns one report entry per
/// record, numbered from 1 in input order. A progress event is emitted
/// every [`PROGRESS_INTERVAL`] records; it affects no computed value.
pub fn convert_records(records: &mut [ProductRecord]) -> Vec<ReportEntry> {
    let total = records.len();
    let mut report = Vec::with_capacity(total);
    for (idx, record) in records.iter_mut().enumerate() {
        let no = idx + 1;
        let old_id = std::mem::take(&mut record.id);
        let new_id = smart_code(record);
        record.old_id = old_id.clone();
        record.id = Value::String(new_id.clone());

        report.push(ReportEntry {
            no,
            old_id: value_text(&old_id).into_owned(),
            new_id,
            category: value_text(&record.category).into_owned(),
            color: value_text(&record.color).into_owned(),
            dimensions: dimension_summary(record),
        });

        if no % PROGRESS_INTERVAL == 0 {
            info!(converted = no, total, "product code conversion progress");
        }
    }
    report
}

/// Raw length/width/height joined with the summary separator, e.g.
/// `45cmx20x` for a record with no recorded height.
pub fn dimension_summary(record: &ProductRecord) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        value_text(&record.length),
        value_text(&record.width),
        value_text(&record.height),
        sep = DIMENSION_SEPARATOR,
    )
}

/// Read a product collection, convert it, and write both artifacts:
/// the updated collection to `output` and the conversion report to
/// `report_path`. Returns the report for callers that want to print a
/// summary.
///
/// Structural failures (unreadable input, malformed top-level JSON)
/// abort with an error and no partial-output guarantee; field-level
/// garbage never fails, per the sentinel policy in [`crate::codes`].
pub fn convert_file(
    input: &Path,
    output: &Path,
    report_path: &Path,
) -> Result<Vec<ReportEntry>, ConvertError> {
    let raw = fs::read_to_string(input)?;
    let mut records: Vec<ProductRecord> =
        serde_json::from_str(&raw).map_err(|source| ConvertError::Parse {
            path: input.display().to_string(),
            source,
        })?;

    info!(records = records.len(), input = %input.display(), "loaded product collection");
    let report = convert_records(&mut records);

    write_json_pretty(output, &records)?;
    write_json_pretty(report_path, &report)?;
    info!(
        records = records.len(),
        output = %output.display(),
        report = %report_path.display(),
        "conversion artifacts written"
    );
    Ok(report)
}

/// Write a value as pretty-printed JSON. UTF-8 throughout, so Thai
/// labels land in the file unescaped.
pub(crate) fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), ConvertError> {
    let raw = serde_json::to_vec_pretty(value).map_err(|source| ConvertError::Encode {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, raw)?;
    Ok(())
}
