use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
///
/// The whole durable state is a string-keyed key-value table: each key
/// holds one JSON-serialized collection or record. A second table keeps
/// the internal operation log.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS store (
             key   TEXT PRIMARY KEY,
             value TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS log (
             id        INTEGER PRIMARY KEY AUTOINCREMENT,
             date      TEXT NOT NULL,
             operation TEXT NOT NULL,
             target    TEXT NOT NULL,
             message   TEXT NOT NULL
         );",
    )?;
    Ok(())
}
