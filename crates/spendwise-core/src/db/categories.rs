//! Category operations

use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::Category;

fn map_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    let created_at_str: String = row.get(3)?;
    Ok(Category {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        created_at: parse_datetime(&created_at_str),
    })
}

/// True when the error is a UNIQUE constraint violation
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl Database {
    /// Create a category for a user
    ///
    /// The name is trimmed. Names are unique per user ignoring case.
    pub fn create_category(&self, user_id: i64, name: &str) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("Category name cannot be empty.".into()));
        }

        let conn = self.conn()?;

        // The name column collates NOCASE, so `=` ignores case here
        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM categories WHERE user_id = ? AND name = ?",
                params![user_id, name],
                |row| row.get(0),
            )
            .optional()?;

        if existing.is_some() {
            return Err(Error::Duplicate {
                entity: "Category",
                name: name.to_string(),
            });
        }

        match conn.execute(
            "INSERT INTO categories (user_id, name) VALUES (?, ?)",
            params![user_id, name],
        ) {
            Ok(_) => {}
            // Another writer won the race between the check and the insert
            Err(e) if is_unique_violation(&e) => {
                return Err(Error::Duplicate {
                    entity: "Category",
                    name: name.to_string(),
                })
            }
            Err(e) => return Err(e.into()),
        }

        let id = conn.last_insert_rowid();
        debug!(user_id, category_id = id, name, "Created category");

        let category = conn.query_row(
            "SELECT id, user_id, name, created_at FROM categories WHERE id = ?",
            params![id],
            map_category,
        )?;
        Ok(category)
    }

    /// List a user's categories sorted by name
    pub fn list_categories(&self, user_id: i64) -> Result<Vec<Category>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, user_id, name, created_at
            FROM categories
            WHERE user_id = ?
            ORDER BY name COLLATE BINARY, id
            "#,
        )?;

        let categories = stmt
            .query_map(params![user_id], map_category)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// Get one of a user's categories by ID
    pub fn get_category(&self, user_id: i64, category_id: i64) -> Result<Option<Category>> {
        let conn = self.conn()?;
        let category = conn
            .query_row(
                "SELECT id, user_id, name, created_at FROM categories WHERE id = ? AND user_id = ?",
                params![category_id, user_id],
                map_category,
            )
            .optional()?;
        Ok(category)
    }

    /// Resolve a category from a 1-based index into `list_categories` or a
    /// name (case-insensitive)
    pub fn find_category(&self, user_id: i64, selector: &str) -> Result<Option<Category>> {
        let selector = selector.trim();

        if let Ok(index) = selector.parse::<usize>() {
            let categories = self.list_categories(user_id)?;
            return Ok(index
                .checked_sub(1)
                .and_then(|i| categories.into_iter().nth(i)));
        }

        let conn = self.conn()?;
        let category = conn
            .query_row(
                "SELECT id, user_id, name, created_at FROM categories WHERE user_id = ? AND name = ?",
                params![user_id, selector],
                map_category,
            )
            .optional()?;
        Ok(category)
    }

    /// Fail with `NotFound` unless the category belongs to the user
    pub(crate) fn require_category(&self, user_id: i64, category_id: i64) -> Result<Category> {
        self.get_category(user_id, category_id)?
            .ok_or_else(|| Error::NotFound(format!("Category {}", category_id)))
    }
}
