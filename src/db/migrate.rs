use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

/// Slot-per-row key/value table plus its first-run marker.
const STORAGE_MIGRATION: &str = "20261018_0001_create_storage";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
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

/// Check if the `storage` table exists.
fn storage_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='storage'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Create the `storage` table: one row per named slot.
fn create_storage_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS storage (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Created storage table')",
        [STORAGE_MIGRATION],
    )?;

    debug!(version = STORAGE_MIGRATION, "migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Idempotent; called by `init` and whenever a store is opened.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    if !storage_table_exists(conn)? || !migration_applied(conn, STORAGE_MIGRATION)? {
        create_storage_table(conn)?;
    }

    Ok(())
}
