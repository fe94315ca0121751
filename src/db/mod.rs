//! Database layer for the daylog application.
//!
//! A thin persistence layer on SQLite: one connection wrapper and one
//! module owning the task record table. Schemas are created on first use
//! with `CREATE TABLE IF NOT EXISTS`, so there is no separate setup step.

/// Core database connection module.
pub mod db;

/// Task record storage and retrieval.
pub mod records;
