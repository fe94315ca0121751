use crate::db::records::Records;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(help = "Record id to delete")]
    id: i64,
    #[arg(short, long, help = "Skip the confirmation prompt")]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteRecord(args.id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if Records::new()?.delete(args.id)? {
        msg_success!(Message::TaskDeleted(args.id));
    } else {
        msg_warning!(Message::TaskNotFoundWithId(args.id));
    }

    Ok(())
}
