//! # Daylog - Daily Task Logger
//!
//! A command-line utility for logging tasks against categories throughout
//! the day and viewing aggregated daily time reports.
//!
//! ## Features
//!
//! - **Task Logging**: Record tasks with a category, name and start time
//! - **Pause and End Markers**: Breaks and end-of-day are records too
//! - **Daily Reports**: Per-category and per-task totals with percentages
//! - **Retention**: Prune records older than a validated cutoff date
//! - **Data Export**: Export reports and records to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daylog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
