//! CLI parsers and runnable entry points shared by the binaries.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::constants::files::{DEFAULT_CSV, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_REPORT};
use crate::constants::report::PREVIEW_LEN;
use crate::convert::convert_file;
use crate::data::ReportEntry;
use crate::report::export_csv_file;

#[derive(Debug, Parser)]
#[command(
    name = "convert_product_codes",
    disable_help_subcommand = true,
    about = "Rewrite product ids to composite SKU codes",
    long_about = "Read a JSON product collection, replace each record's id with the \
generated composite code (keeping the prior value in oldId), and write the \
updated collection plus a JSON conversion report."
)]
struct ConvertCli {
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_INPUT,
        help = "Product collection to convert (JSON array of records)"
    )]
    input: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT,
        help = "Where to write the updated collection"
    )]
    output: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_REPORT,
        help = "Where to write the JSON conversion report"
    )]
    report: PathBuf,
}

#[derive(Debug, Parser)]
#[command(
    name = "export_csv_report",
    disable_help_subcommand = true,
    about = "Render a conversion report as CSV",
    long_about = "Read a JSON conversion report and write a CSV rendering with the \
dimension summary split into separate columns and an empty price column. The \
file starts with a UTF-8 BOM so spreadsheet tools render Thai text correctly."
)]
struct ExportCli {
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_REPORT,
        help = "JSON conversion report to render"
    )]
    report: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_CSV,
        help = "Where to write the CSV report"
    )]
    csv: PathBuf,
}

/// Run the product-code converter with the given CLI arguments
/// (binary name excluded, as from `std::env::args().skip(1)`).
pub fn run_convert<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_tracing();
    let Some(cli) = parse_cli::<ConvertCli, _>(
        std::iter::once("convert_product_codes".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let report = convert_file(&cli.input, &cli.output, &cli.report)?;

    println!("Converted {} product codes", report.len());
    println!("  updated collection: {}", cli.output.display());
    println!("  conversion report:  {}", cli.report.display());
    if !report.is_empty() {
        println!();
        print_preview(&report);
    }
    Ok(())
}

/// Run the CSV exporter with the given CLI arguments
/// (binary name excluded, as from `std::env::args().skip(1)`).
pub fn run_export<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_tracing();
    let Some(cli) = parse_cli::<ExportCli, _>(
        std::iter::once("export_csv_report".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let rows = export_csv_file(&cli.report, &cli.csv)?;
    println!("Wrote {} rows to {}", rows, cli.csv.display());
    Ok(())
}

/// Print the first few report entries as a fixed-width sample table.
fn print_preview(report: &[ReportEntry]) {
    println!("First {} conversions:", report.len().min(PREVIEW_LEN));
    println!("{:<5} {:<20} {:<30} {}", "No.", "Old id", "New id", "Category");
    println!("{}", "-".repeat(80));
    for entry in report.iter().take(PREVIEW_LEN) {
        println!(
            "{:<5} {:<20} {:<30} {}",
            entry.no, entry.old_id, entry.new_id, entry.category
        );
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
