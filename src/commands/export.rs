use crate::libs::export::{ExportData, ExportFormat, Exporter};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value = "report", help = "What to export")]
    data: ExportData,
    #[arg(short, long, value_enum, default_value = "csv", help = "Output format")]
    format: ExportFormat,
    #[arg(short, long, help = "Day to export (defaults to today)")]
    date: Option<NaiveDate>,
    #[arg(short, long, help = "Output file path")]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let now = Local::now().naive_local();
    let date = args.date.unwrap_or_else(|| now.date());

    Exporter::new(args.format, args.output).export(args.data, date, now)
}
