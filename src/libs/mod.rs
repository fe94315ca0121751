//! Core library modules for the daylog application.
//!
//! Provides the computation core (time parsing, duration formatting,
//! report aggregation, validation) plus the application plumbing around
//! it: configuration, persistence paths, console rendering, export and
//! the centralized messaging system.

pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod report;
pub mod task;
pub mod time;
pub mod validate;
pub mod view;
