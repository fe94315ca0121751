use crate::db::records::Records;
use crate::libs::messages::Message;
use crate::libs::report::RecordGroup;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, help = "Day to list (defaults to today)")]
    date: Option<NaiveDate>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let now = Local::now().naive_local();
    let date = args.date.unwrap_or_else(|| now.date());
    let records = Records::new()?.fetch(TaskFilter::Date(date))?;

    if records.is_empty() {
        msg_print!(Message::RecordsNotFoundForDate(date.format("%Y-%m-%d").to_string()));
        return Ok(());
    }

    msg_print!(Message::RecordsHeader(date.format("%B %-d, %Y").to_string()), true);
    View::records(&records.format(now))?;

    Ok(())
}
