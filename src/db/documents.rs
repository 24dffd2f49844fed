//! Document store seam and its SQLite implementation.
//!
//! Writes are field-level merges: keys present in a patch replace the stored
//! values, every other key is left untouched. There is no version check, so
//! two merges racing on the same field resolve last-writer-wins.

use crate::db::log::ttlog;
use crate::db::paths::{DayPath, WeekPath};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::{DayDocument, DayRecord};
use crate::ui::messages::warning;
use crate::utils::date::parse_date;
use chrono::{Local, NaiveDate};
use rusqlite::{OptionalExtension, params};
use serde_json::{Map, Value};

pub type Fields = Map<String, Value>;

pub trait DocumentStore {
    /// Read one document; `None` when it was never written.
    fn get(&self, path: &DayPath) -> AppResult<Option<Fields>>;

    /// Every document of a week collection as `(day_id, fields)`, ordered by day.
    fn list_week(&self, week: &WeekPath) -> AppResult<Vec<(String, Fields)>>;

    /// Week starts for which `user_id` has at least one document.
    fn list_weeks(&self, user_id: &str) -> AppResult<Vec<NaiveDate>>;

    /// Every user that ever wrote a document.
    fn list_users(&self) -> AppResult<Vec<String>>;

    /// Merge `patch` into the document at `path`, creating it if missing.
    fn merge(&mut self, path: &DayPath, patch: Fields) -> AppResult<()>;
}

fn parse_body(path: &str, body: &str) -> AppResult<Fields> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::Document {
            path: path.to_string(),
            reason: "body is not a JSON object".to_string(),
        }),
    }
}

impl DocumentStore for DbPool {
    fn get(&self, path: &DayPath) -> AppResult<Option<Fields>> {
        let key = path.to_string();
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM documents WHERE path = ?1",
                [&key],
                |row| row.get(0),
            )
            .optional()?;

        body.map(|b| parse_body(&key, &b)).transpose()
    }

    fn list_week(&self, week: &WeekPath) -> AppResult<Vec<(String, Fields)>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT path, day_id, body FROM documents
             WHERE user_id = ?1 AND week_id = ?2
             ORDER BY day_id ASC",
        )?;

        let rows = stmt.query_map(params![week.user_id, week.week_id()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut out = Vec::new();
        for r in rows {
            let (path, day_id, body) = r?;
            out.push((day_id, parse_body(&path, &body)?));
        }
        Ok(out)
    }

    fn list_weeks(&self, user_id: &str) -> AppResult<Vec<NaiveDate>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT DISTINCT week_id FROM documents WHERE user_id = ?1 ORDER BY week_id ASC",
        )?;
        let rows = stmt.query_map([user_id], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            let raw = r?;
            let d = parse_date(&raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
            out.push(d);
        }
        Ok(out)
    }

    fn list_users(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id FROM users ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn merge(&mut self, path: &DayPath, patch: Fields) -> AppResult<()> {
        let key = path.to_string();
        let now = Local::now().to_rfc3339();
        let changed: Vec<String> = patch.keys().cloned().collect();

        // Read-modify-write of a single document is atomic locally; nothing
        // spans more than one document.
        let tx = self.conn.transaction()?;

        let existing: Option<String> = tx
            .query_row(
                "SELECT body FROM documents WHERE path = ?1",
                [&key],
                |row| row.get(0),
            )
            .optional()?;

        let mut fields = match existing {
            Some(body) => parse_body(&key, &body)?,
            None => Fields::new(),
        };
        fields.extend(patch);

        let body = serde_json::to_string(&Value::Object(fields))?;

        tx.execute(
            "INSERT OR IGNORE INTO users (id, created_at) VALUES (?1, ?2)",
            params![path.user_id(), now],
        )?;

        tx.execute(
            "INSERT INTO documents (path, user_id, week_id, day_id, body, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(path) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
            params![
                key,
                path.user_id(),
                path.week.week_id(),
                path.day_id(),
                body,
                now
            ],
        )?;

        tx.commit()?;

        if let Err(e) = ttlog(&self.conn, "merge", &key, &changed.join(",")) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(())
    }
}

/// Typed read of one day. Missing documents yield an empty record.
pub fn load_day<S: DocumentStore + ?Sized>(
    store: &S,
    user_id: &str,
    date: NaiveDate,
) -> AppResult<DayRecord> {
    let path = DayPath::new(user_id, date);
    match store.get(&path)? {
        Some(fields) => {
            let doc = DayDocument::from_fields(fields).map_err(|e| AppError::Document {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
            DayRecord::from_document(&path.day_id(), &doc)
        }
        None => Ok(DayRecord::empty(date)),
    }
}

/// Typed read of a week collection. Documents that fail to decode are
/// reported and skipped so one bad day does not hide the rest.
pub fn load_week<S: DocumentStore + ?Sized>(
    store: &S,
    week: &WeekPath,
) -> AppResult<Vec<DayRecord>> {
    let mut out = Vec::new();
    for (day_id, fields) in store.list_week(week)? {
        match decode(&day_id, fields) {
            Ok(r) => out.push(r),
            Err(e) => warning(format!("Skipping {}/{}: {}", week, day_id, e)),
        }
    }
    Ok(out)
}

fn decode(day_id: &str, fields: Fields) -> AppResult<DayRecord> {
    let doc = DayDocument::from_fields(fields)?;
    DayRecord::from_document(day_id, &doc)
}

/// Merge a typed patch into `user_id`'s document for `date`.
pub fn merge_day<S: DocumentStore + ?Sized>(
    store: &mut S,
    user_id: &str,
    date: NaiveDate,
    patch: DayDocument,
) -> AppResult<()> {
    let path = DayPath::new(user_id, date);
    store.merge(&path, patch.into_fields()?)
}
