//! Monthly budget operations

use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{parse_datetime, validate_amount, Database};
use crate::error::Result;
use crate::models::Budget;
use crate::period::validate_month;

const BUDGET_COLUMNS: &str = "id, user_id, category_id, year, month, amount, created_at";

fn map_budget(row: &Row<'_>) -> rusqlite::Result<Budget> {
    let created_at_str: String = row.get(6)?;
    Ok(Budget {
        id: row.get(0)?,
        user_id: row.get(1)?,
        category_id: row.get(2)?,
        year: row.get(3)?,
        month: row.get(4)?,
        amount: row.get(5)?,
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// Set the budget for a category and month, replacing any existing amount
    ///
    /// The row keeps its ID when updated. Nothing is written if validation
    /// fails.
    pub fn set_budget(
        &self,
        user_id: i64,
        category_id: i64,
        year: i32,
        month: u32,
        amount: f64,
    ) -> Result<Budget> {
        validate_amount(amount, "Budget")?;
        validate_month(month)?;
        self.require_category(user_id, category_id)?;

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO budgets (user_id, category_id, year, month, amount)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(user_id, category_id, month, year) DO UPDATE SET
                amount = excluded.amount
            "#,
            params![user_id, category_id, year, month, amount],
        )?;

        let budget = conn.query_row(
            &format!(
                "SELECT {} FROM budgets WHERE user_id = ? AND category_id = ? AND year = ? AND month = ?",
                BUDGET_COLUMNS
            ),
            params![user_id, category_id, year, month],
            map_budget,
        )?;
        debug!(
            budget_id = budget.id,
            category_id,
            year,
            month,
            amount,
            "Set budget"
        );

        Ok(budget)
    }

    /// Get the budget for a category and month, if one is set
    pub fn get_budget_for_category(
        &self,
        user_id: i64,
        category_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Option<Budget>> {
        let conn = self.conn()?;
        let budget = conn
            .query_row(
                &format!(
                    "SELECT {} FROM budgets WHERE user_id = ? AND category_id = ? AND year = ? AND month = ?",
                    BUDGET_COLUMNS
                ),
                params![user_id, category_id, year, month],
                map_budget,
            )
            .optional()?;
        Ok(budget)
    }

    /// List all budgets of a user for a month
    pub fn list_budgets(&self, user_id: i64, year: i32, month: u32) -> Result<Vec<Budget>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM budgets WHERE user_id = ? AND year = ? AND month = ? ORDER BY category_id",
            BUDGET_COLUMNS
        ))?;

        let budgets = stmt
            .query_map(params![user_id, year, month], map_budget)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(budgets)
    }
}
