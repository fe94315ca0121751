use crate::libs::formatter::{format_duration_minutes, FormattedRecord};
use crate::libs::report::DayReport;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the day's raw records as a table.
    pub fn records(records: &[FormattedRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "START", "CATEGORY", "TASK", "KIND", "DURATION"]);
        for record in records {
            table.add_row(row![
                record.id,
                record.start,
                record.category,
                record.name,
                record.kind,
                record.duration
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the aggregated day report: one indented block per category,
    /// tasks beneath it, percentages relative to the day's total.
    pub fn report(report: &DayReport) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CATEGORY", "TASK", "TIME", "SHARE"]);
        for category in &report.categories {
            table.add_row(row![
                category.name,
                "",
                format_duration_minutes(category.minutes),
                format!("{:.1}%", category.percent)
            ]);
            for task in &category.tasks {
                table.add_row(row![
                    "",
                    task.name,
                    format_duration_minutes(task.minutes),
                    format!("{:.1}%", task.percent)
                ]);
            }
        }
        table.printstd();

        Ok(())
    }
}
