pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod prune;
pub mod report;
pub mod task;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Log a task")]
    Task(task::TaskArgs),
    #[command(about = "List records for a day")]
    List(list::ListArgs),
    #[command(about = "Delete a record")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show the aggregated day report")]
    Report(report::ReportArgs),
    #[command(about = "Delete records older than the retention cutoff")]
    Prune(prune::PruneArgs),
    #[command(about = "Export reports or records to CSV/JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Task(args) => task::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Prune(args) => prune::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
