#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// CLI parsers and runnable entry points shared by the binaries.
pub mod cli;
/// Core code-normalization functions (category, color, dimension, model).
pub mod codes;
/// Lookup tables, sentinel codes, and report/file constants.
pub mod constants;
/// Batch conversion driver and JSON file round trip.
pub mod convert;
/// Product record and report entry types.
pub mod data;
/// CSV rendering and export of conversion reports.
pub mod report;
/// Shared string type aliases.
pub mod types;

mod errors;

pub use codes::{category_code, color_code, dimension_code, model_number, smart_code};
pub use convert::{convert_file, convert_records};
pub use data::{ProductRecord, ReportEntry, value_text};
pub use errors::ConvertError;
pub use report::{export_csv_file, render_csv, split_dimensions};
pub use types::{CategoryLabel, CodeSegment, ColorPhrase, ProductCode};
