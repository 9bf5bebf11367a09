//! Core code-normalization functions.
//!
//! Every function here is total: malformed input degrades to a fixed
//! sentinel segment instead of erroring, so a whole collection always
//! converts. See `constants::codes` for the tables and sentinels.

use crate::constants::codes::{
    CATEGORY_CODES, CATEGORY_FALLBACK, COLOR_CODES, COLOR_PREFIX_LEN, COLOR_UNKNOWN,
    DIMENSION_FALLBACK, DIMENSION_MIN_WIDTH, MODEL_FALLBACK,
};
use crate::data::{ProductRecord, value_text};
use crate::types::{CodeSegment, ProductCode};

/// Map a category label to its two-letter code.
///
/// Exact lookup against the closed category table; any unrecognized
/// label, including the empty string, maps to the fallback code.
pub fn category_code(category: &str) -> &'static str {
    CATEGORY_CODES
        .iter()
        .find(|(label, _)| *label == category)
        .map(|(_, code)| *code)
        .unwrap_or(CATEGORY_FALLBACK)
}

/// Map a free-text color description to a three-letter code.
///
/// Only the phrase before the first comma counts. The table is scanned
/// in order and the first entry whose label occurs anywhere in the
/// phrase wins, so `"ทองแดงเงา"` matches `ทอง` before `ทองแดง` is ever
/// considered. An unmatched phrase falls back to its first three
/// characters upper-cased; an empty color field yields the unknown
/// sentinel.
pub fn color_code(color: &str) -> CodeSegment {
    if color.is_empty() {
        return COLOR_UNKNOWN.to_string();
    }
    let primary = color.split(',').next().unwrap_or_default().trim();
    for (label, code) in COLOR_CODES {
        if primary.contains(label) {
            return (*code).to_string();
        }
    }
    primary
        .chars()
        .take(COLOR_PREFIX_LEN)
        .collect::<String>()
        .to_uppercase()
}

/// Normalize a free-text dimension value to a zero-padded segment.
///
/// Strips everything but ASCII digits and the decimal point, truncates
/// toward zero, and left-pads to at least two digits. Empty or
/// unparsable values yield `"00"`.
pub fn dimension_code(value: &str) -> CodeSegment {
    let cleaned: String = value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    if cleaned.is_empty() {
        return DIMENSION_FALLBACK.to_string();
    }
    match cleaned.parse::<f64>() {
        Ok(number) => format!(
            "{:0width$}",
            number.trunc() as u64,
            width = DIMENSION_MIN_WIDTH
        ),
        Err(_) => DIMENSION_FALLBACK.to_string(),
    }
}

/// Extract the model number from a mixed alphanumeric base code.
///
/// Keeps ASCII digits only; a digit-free or absent base code yields the
/// `"000"` fallback.
pub fn model_number(base_code: &str) -> CodeSegment {
    let digits: String = base_code
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        MODEL_FALLBACK.to_string()
    } else {
        digits
    }
}

/// Generate the composite code for a record:
/// `{category}{model}-{color}-{length}-{width}-{height}`.
pub fn smart_code(record: &ProductRecord) -> ProductCode {
    let category = category_code(&value_text(&record.category));
    let model = model_number(&value_text(&record.base_code));
    let color = color_code(&value_text(&record.color));
    let length = dimension_code(&value_text(&record.length));
    let width = dimension_code(&value_text(&record.width));
    let height = dimension_code(&value_text(&record.height));
    format!("{category}{model}-{color}-{length}-{width}-{height}")
}
