use crate::db::records::Records;
use crate::libs::messages::Message;
use crate::libs::task::{TaskKind, TaskRecord};
use crate::libs::time::parse_time_string;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[arg(short, long, help = "Category to log the task against")]
    category: Option<String>,
    #[arg(short, long, help = "Task name")]
    name: Option<String>,
    #[arg(short, long, help = "Start time as HH:MM (defaults to now)")]
    start: Option<String>,
    #[arg(short = 'd', long, help = "Day of the record (defaults to today)")]
    date: Option<NaiveDate>,
    #[arg(short, long, value_enum, default_value_t = TaskKind::Normal, help = "Record kind")]
    kind: TaskKind,
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let now = Local::now();
    let date = args.date.unwrap_or_else(|| now.date_naive());
    let start = args.start.unwrap_or_else(|| now.format("%H:%M").to_string());
    if parse_time_string(&start).is_none() {
        msg_bail_anyhow!(Message::InvalidStartTime(start));
    }

    // Pause and end markers carry fixed labels; only normal tasks prompt
    // for the missing fields.
    let (category, name) = match args.kind {
        TaskKind::Normal => {
            let category = match args.category {
                Some(category) => category,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptCategory.to_string())
                    .interact_text()?,
            };
            let name = match args.name {
                Some(name) => name,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptTaskName.to_string())
                    .interact_text()?,
            };
            (category, name)
        }
        TaskKind::Pause => (String::new(), "pause".to_string()),
        TaskKind::End => (String::new(), "end".to_string()),
    };

    let record = TaskRecord::new(date, &start, &category, &name, args.kind);
    Records::new()?.insert(&record)?;
    msg_success!(Message::TaskCreated(record.name));

    Ok(())
}
