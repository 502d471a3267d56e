use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Check if the `kv` table exists.
fn kv_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `kv` table.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Ensure the schema silently (used every time a store is opened).
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    create_kv_table(conn)
}

/// Public entry point for `init`: create what is missing and report it.
/// Returns true when the table had to be created.
pub fn run_pending_migrations(conn: &Connection) -> Result<bool> {
    if kv_table_exists(conn)? {
        tracing::debug!("kv table already present");
        return Ok(false);
    }

    create_kv_table(conn)?;
    success("Created kv table.");
    Ok(true)
}
