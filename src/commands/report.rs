use crate::db::records::Records;
use crate::libs::formatter::format_duration_minutes;
use crate::libs::messages::Message;
use crate::libs::report::build_day_report;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(short, long, help = "Day to report on (defaults to today)")]
    date: Option<NaiveDate>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let now = Local::now().naive_local();
    let date = args.date.unwrap_or_else(|| now.date());
    let records = Records::new()?.fetch(TaskFilter::Date(date))?;

    if records.is_empty() {
        msg_print!(Message::RecordsNotFoundForDate(date.format("%Y-%m-%d").to_string()));
        return Ok(());
    }

    let report = build_day_report(&records, now);

    msg_print!(Message::ReportHeader(date.format("%B %-d, %Y").to_string()), true);
    View::report(&report)?;
    msg_print!(Message::ReportTotal(format_duration_minutes(report.total_minutes)));
    if report.pause_minutes > 0.0 {
        msg_print!(Message::ReportPauseTotal(format_duration_minutes(report.pause_minutes)));
    }

    Ok(())
}
