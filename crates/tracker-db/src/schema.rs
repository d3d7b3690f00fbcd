use rusqlite::{Connection, Result};
use std::path::Path;

pub fn open(path: impl AsRef<Path>) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;
    Ok(conn)
}

/// Creates the events table if it is missing. Safe to run on every start.
pub fn migrate(conn: &Connection) -> Result<()> {
    let sql = include_str!("../migrations/0001_init.sql");
    conn.execute_batch(sql)?;
    Ok(())
}

pub fn open_and_migrate(path: impl AsRef<Path>) -> Result<Connection> {
    let conn = open(path)?;
    migrate(&conn)?;
    Ok(conn)
}

pub fn with_test_db() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.pragma_update(None, "busy_timeout", 5000)?;
    migrate(&conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracking.db");
        assert!(!path.exists());

        let conn = open_and_migrate(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
        assert!(path.exists());
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let conn = with_test_db().unwrap();
        conn.execute(
            "INSERT INTO events (user_id, event, timestamp, ts_seconds, ts_nanos) VALUES ('u', 'e', '2024-01-01T00:00:00Z', 1704067200, 0)",
            [],
        )
        .unwrap();
        migrate(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
