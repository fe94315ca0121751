//! Data export functionality for reports and raw records.
//!
//! Exports either the aggregated day report or the day's raw records to
//! CSV or JSON. Output goes to a caller-supplied path or to a timestamped
//! file in the current directory.

use crate::{
    db::records::Records,
    libs::{
        formatter::FormattedRecord,
        messages::Message,
        report::{build_day_report, DayReport, RecordGroup},
        task::TaskFilter,
    },
    msg_debug, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// The aggregated day report.
    Report,
    /// The day's raw records.
    Records,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportReport {
    pub date: String,
    pub total_minutes: f64,
    pub pause_minutes: f64,
    pub categories: Vec<ExportCategory>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportCategory {
    pub name: String,
    pub minutes: f64,
    pub percent: f64,
    pub tasks: Vec<ExportTask>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTask {
    pub name: String,
    pub minutes: f64,
    pub percent: f64,
}

/// One flattened report row for CSV output.
#[derive(Debug, Serialize)]
struct ReportCsvRow<'a> {
    category: &'a str,
    task: &'a str,
    minutes: f64,
    percent: f64,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("daylog_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn export(&self, data_type: ExportData, date: NaiveDate, now: NaiveDateTime) -> Result<()> {
        let records = Records::new()?.fetch(TaskFilter::Date(date))?;
        msg_debug!(format!("Exporting {} record(s) to {}", records.len(), self.output_path.display()));

        match data_type {
            ExportData::Report => {
                let report = build_day_report(&records, now);
                let export = Self::report_data(&report);
                match self.format {
                    ExportFormat::Csv => self.write_report_csv(&export)?,
                    ExportFormat::Json => self.write_json(&export)?,
                }
            }
            ExportData::Records => {
                let rows = records.format(now);
                match self.format {
                    ExportFormat::Csv => self.write_records_csv(&rows)?,
                    ExportFormat::Json => self.write_json(&rows)?,
                }
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn report_data(report: &DayReport) -> ExportReport {
        ExportReport {
            date: report.date.format("%Y-%m-%d").to_string(),
            total_minutes: report.total_minutes,
            pause_minutes: report.pause_minutes,
            categories: report
                .categories
                .iter()
                .map(|category| ExportCategory {
                    name: category.name.clone(),
                    minutes: category.minutes,
                    percent: category.percent,
                    tasks: category
                        .tasks
                        .iter()
                        .map(|task| ExportTask {
                            name: task.name.clone(),
                            minutes: task.minutes,
                            percent: task.percent,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    fn write_json<T: Serialize>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_report_csv(&self, report: &ExportReport) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.output_path)?;
        for category in &report.categories {
            for task in &category.tasks {
                writer.serialize(ReportCsvRow {
                    category: &category.name,
                    task: &task.name,
                    minutes: task.minutes,
                    percent: task.percent,
                })?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    fn write_records_csv(&self, rows: &[FormattedRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.output_path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
