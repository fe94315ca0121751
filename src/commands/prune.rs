use crate::db::records::Records;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::validate::validate_cutoff_date;
use crate::{msg_bail_anyhow, msg_debug, msg_print, msg_success};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct PruneArgs {
    #[arg(short, long, help = "Cutoff date as YYYY-MM-DD (defaults to the configured retention)")]
    before: Option<String>,
    #[arg(short, long, help = "Skip the confirmation prompt")]
    yes: bool,
}

/// Deletes records older than the cutoff date.
///
/// The cutoff comes from `--before` or is derived from the configured
/// retention policy; either way it passes through the cutoff-date
/// validator, so a typo or an overly recent date is rejected before
/// anything is deleted.
pub fn cmd(args: PruneArgs) -> Result<()> {
    let today = Local::now().date_naive();

    let cutoff_str = match args.before {
        Some(before) => before,
        None => match Config::read()?.retention {
            Some(retention) => (today - Duration::days(retention.keep_days as i64)).format("%Y-%m-%d").to_string(),
            None => msg_bail_anyhow!(Message::PruneCutoffUnavailable),
        },
    };

    msg_debug!(format!("Resolved prune cutoff: {}", cutoff_str));
    validate_cutoff_date(&cutoff_str, today)?;
    let cutoff = NaiveDate::parse_from_str(&cutoff_str, "%Y-%m-%d")?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmPrune(cutoff_str.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let deleted = Records::new()?.delete_before(cutoff)?;
    if deleted > 0 {
        msg_success!(Message::PruneDeletedCount(deleted));
    } else {
        msg_print!(Message::PruneNothingToDelete(cutoff_str));
    }

    Ok(())
}
