//! Expense operations

use chrono::NaiveDate;
use rusqlite::{params, Row};
use tracing::debug;

use super::{parse_date_column, parse_datetime, validate_amount, Database};
use crate::error::Result;
use crate::models::Expense;
use crate::period::month_date_range;

const EXPENSE_COLUMNS: &str = "id, user_id, category_id, amount, date, description, created_at";

fn map_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    let date_str: String = row.get(4)?;
    let created_at_str: String = row.get(6)?;
    Ok(Expense {
        id: row.get(0)?,
        user_id: row.get(1)?,
        category_id: row.get(2)?,
        amount: row.get(3)?,
        date: parse_date_column(4, &date_str)?,
        description: row.get(5)?,
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// Record an expense under one of the user's categories
    pub fn add_expense(
        &self,
        user_id: i64,
        category_id: i64,
        amount: f64,
        date: NaiveDate,
        description: Option<&str>,
    ) -> Result<Expense> {
        validate_amount(amount, "Expense")?;
        self.require_category(user_id, category_id)?;

        let description = description.unwrap_or_default();

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO expenses (user_id, category_id, amount, date, description)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![user_id, category_id, amount, date.to_string(), description],
        )?;
        let id = conn.last_insert_rowid();
        debug!(expense_id = id, category_id, amount, %date, "Added expense");

        let expense = conn.query_row(
            &format!("SELECT {} FROM expenses WHERE id = ?", EXPENSE_COLUMNS),
            params![id],
            map_expense,
        )?;
        Ok(expense)
    }

    /// List a user's expenses in a month, oldest first
    pub fn list_expenses(&self, user_id: i64, year: i32, month: u32) -> Result<Vec<Expense>> {
        let (start, end) = month_date_range(year, month)?;

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {}
            FROM expenses
            WHERE user_id = ? AND date BETWEEN ? AND ?
            ORDER BY date, id
            "#,
            EXPENSE_COLUMNS
        ))?;

        let expenses = stmt
            .query_map(
                params![user_id, start.to_string(), end.to_string()],
                map_expense,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(expenses)
    }
}
