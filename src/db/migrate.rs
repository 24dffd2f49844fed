use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migration markers live there too.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// One per-user row; the admin timesheet enumerates users from here.
fn create_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            created_at  TEXT NOT NULL
        );
        "#,
    )
}

/// Day documents keyed by their full path, JSON body in `body`.
fn create_documents_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            path        TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL,
            week_id     TEXT NOT NULL,
            day_id      TEXT NOT NULL,
            body        TEXT NOT NULL DEFAULT '{}',
            updated_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_documents_user_week ON documents(user_id, week_id);
        "#,
    )
}

fn create_documents_day_index(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_documents_user_day ON documents(user_id, day_id);",
    )
}

type Step = fn(&Connection) -> Result<()>;

const MIGRATIONS: &[(&str, &str, Step)] = &[
    (
        "20251001_0001_create_users",
        "Created users table",
        create_users_table,
    ),
    (
        "20251001_0002_create_documents",
        "Created documents table",
        create_documents_table,
    ),
    (
        "20251015_0003_documents_day_index",
        "Indexed documents by user and day",
        create_documents_day_index,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        step(conn)?;
        mark_applied(conn, version, message)?;
        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}

/// Versions already applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
