//! String-keyed key-value access over the `store` table.
//!
//! Each key holds a JSON-serialized array or single record. Collections
//! are always written back whole; there is no partial or diff persistence.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Durable storage keys. Kept as constants so the set of keys in use is
/// visible in one place.
pub const KEY_COUNSELORS: &str = "counselors";
pub const KEY_APPOINTMENTS: &str = "appointments";
pub const KEY_MESSAGES: &str = "messages";
pub const KEY_INVOICES: &str = "invoices";
pub const KEY_USER: &str = "user";
pub const KEY_REGISTERED_USERS: &str = "registeredUsers";
pub const KEY_INTENDED_PATH: &str = "intendedPath";

pub fn get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM store WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

pub fn put(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn delete(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM store WHERE key = ?1", [key])?;
    Ok(())
}

/// Read and deserialize the JSON under `key`, if present.
pub fn load_json<T: DeserializeOwned>(conn: &Connection, key: &str) -> AppResult<Option<T>> {
    match get(conn, key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` and write it under `key`, replacing any prior value.
pub fn store_json<T: Serialize>(conn: &Connection, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    put(conn, key, &raw)
}
