use super::db::Db;
use crate::libs::task::{TaskFilter, TaskKind, TaskRecord};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

const SCHEMA_RECORDS: &str = "CREATE TABLE IF NOT EXISTS records (
    id INTEGER NOT NULL PRIMARY KEY,
    date DATE NOT NULL,
    start TEXT NOT NULL,
    category TEXT NOT NULL,
    name TEXT NOT NULL,
    kind TEXT NOT NULL DEFAULT 'normal'
);";
const INSERT_RECORD: &str = "INSERT INTO records (date, start, category, name, kind) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_RECORDS: &str = "SELECT id, date, start, category, name, kind FROM records";
const WHERE_DATE: &str = "WHERE date = ?1";
const ORDER_BY_START: &str = "ORDER BY date, start";
const UPDATE_RECORD: &str = "UPDATE records SET date = ?1, start = ?2, category = ?3, name = ?4, kind = ?5 WHERE id = ?6";
const DELETE_RECORD: &str = "DELETE FROM records WHERE id = ?1";
const DELETE_BEFORE: &str = "DELETE FROM records WHERE date < ?1";

pub struct Records {
    pub conn: Connection,
}

impl Records {
    pub fn new() -> Result<Records> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_RECORDS, [])?;

        Ok(Records { conn: db.conn })
    }

    pub fn insert(&mut self, record: &TaskRecord) -> Result<()> {
        self.conn.execute(
            INSERT_RECORD,
            params![record.date, record.start, record.category, record.name, record.kind.as_str()],
        )?;

        Ok(())
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<TaskRecord>> {
        let mut records = Vec::new();
        match filter {
            TaskFilter::All => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_RECORDS, ORDER_BY_START))?;
                let record_iter = stmt.query_map([], Self::map_row)?;
                for record in record_iter {
                    records.push(record?);
                }
            }
            TaskFilter::Date(date) => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{} {} {}", SELECT_RECORDS, WHERE_DATE, ORDER_BY_START))?;
                let record_iter = stmt.query_map([date], Self::map_row)?;
                for record in record_iter {
                    records.push(record?);
                }
            }
        }

        Ok(records)
    }

    pub fn update(&mut self, record: &TaskRecord) -> Result<()> {
        let id = record.id.ok_or_else(|| anyhow::anyhow!("record has no id"))?;
        self.conn.execute(
            UPDATE_RECORD,
            params![record.date, record.start, record.category, record.name, record.kind.as_str(), id],
        )?;
        Ok(())
    }

    /// Deletes one record; returns whether a row was removed.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_RECORD, params![id])?;
        Ok(affected > 0)
    }

    /// Deletes all records strictly older than the cutoff date and returns
    /// the number of rows removed.
    pub fn delete_before(&mut self, cutoff: NaiveDate) -> Result<usize> {
        let affected = self.conn.execute(DELETE_BEFORE, params![cutoff])?;
        Ok(affected)
    }

    fn map_row(row: &Row) -> rusqlite::Result<TaskRecord> {
        Ok(TaskRecord {
            id: row.get(0)?,
            date: row.get(1)?,
            start: row.get(2)?,
            category: row.get(3)?,
            name: row.get(4)?,
            kind: TaskKind::from_code(&row.get::<_, String>(5)?),
        })
    }
}
