//! User operations

use rusqlite::{params, OptionalExtension, Row};
use tracing::info;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::User;

fn map_user(row: &Row<'_>) -> rusqlite::Result<User> {
    let created_at_str: String = row.get(3)?;
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// Return the first user, creating one with the given identity if the
    /// store has none
    pub fn ensure_default_user(&self, name: &str, email: &str) -> Result<User> {
        let conn = self.conn()?;

        let existing = conn
            .query_row(
                "SELECT id, name, email, created_at FROM users ORDER BY id LIMIT 1",
                [],
                map_user,
            )
            .optional()?;

        if let Some(user) = existing {
            return Ok(user);
        }

        conn.execute(
            "INSERT INTO users (name, email) VALUES (?, ?)",
            params![name, email],
        )?;
        let id = conn.last_insert_rowid();
        info!(user_id = id, email, "Created default user");

        let user = conn.query_row(
            "SELECT id, name, email, created_at FROM users WHERE id = ?",
            params![id],
            map_user,
        )?;
        Ok(user)
    }

    /// Get a user by ID
    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                "SELECT id, name, email, created_at FROM users WHERE id = ?",
                params![id],
                map_user,
            )
            .optional()?;
        Ok(user)
    }
}
