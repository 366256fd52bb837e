//! Spending reports and budget checks

use chrono::NaiveDate;
use rusqlite::params;

use super::Database;
use crate::alerts::{evaluate_budget, BudgetAlert};
use crate::error::Result;
use crate::models::{BudgetPeriod, BudgetStatus, CategorySummaryRow};
use crate::period::month_date_range;

impl Database {
    /// Total spent by a user in a month; 0.0 when nothing was spent
    pub fn get_monthly_total(&self, user_id: i64, year: i32, month: u32) -> Result<f64> {
        let (start, end) = month_date_range(year, month)?;

        let conn = self.conn()?;
        let total: f64 = conn.query_row(
            r#"
            SELECT COALESCE(SUM(amount), 0.0)
            FROM expenses
            WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
            "#,
            params![user_id, start.to_string(), end.to_string()],
            |row| row.get(0),
        )?;

        Ok(total)
    }

    /// Total spent by a user in one category in a month
    pub fn get_spent_for_category(
        &self,
        user_id: i64,
        category_id: i64,
        year: i32,
        month: u32,
    ) -> Result<f64> {
        let (start, end) = month_date_range(year, month)?;

        let conn = self.conn()?;
        let total: f64 = conn.query_row(
            r#"
            SELECT COALESCE(SUM(amount), 0.0)
            FROM expenses
            WHERE user_id = ?1 AND category_id = ?2 AND date BETWEEN ?3 AND ?4
            "#,
            params![user_id, category_id, start.to_string(), end.to_string()],
            |row| row.get(0),
        )?;

        Ok(total)
    }

    /// Spend vs budget per category for a month
    ///
    /// Only categories with at least one expense in the month appear, sorted
    /// by name. Budgeted categories without spending are left out.
    pub fn get_category_summary(
        &self,
        user_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<CategorySummaryRow>> {
        let (start, end) = month_date_range(year, month)?;

        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                c.id,
                c.name,
                SUM(e.amount) AS spent,
                b.amount AS budget
            FROM expenses e
            JOIN categories c ON c.id = e.category_id
            LEFT JOIN budgets b ON b.category_id = c.id
                AND b.user_id = ?1
                AND b.year = ?4
                AND b.month = ?5
            WHERE e.user_id = ?1
              AND e.date BETWEEN ?2 AND ?3
            GROUP BY c.id, c.name, b.amount
            ORDER BY c.name COLLATE BINARY, c.id
            "#,
        )?;

        let rows = stmt
            .query_map(
                params![user_id, start.to_string(), end.to_string(), year, month],
                |row| {
                    let spent: f64 = row.get(2)?;
                    let budget: Option<f64> = row.get(3)?;
                    Ok(CategorySummaryRow {
                        category_id: row.get(0)?,
                        category: row.get(1)?,
                        budget,
                        spent,
                        status: BudgetStatus::classify(spent, budget),
                    })
                },
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Check a category's budget for the month containing `date`
    ///
    /// Returns `None` when no budget is set, whatever the spend.
    pub fn check_budget_alert(
        &self,
        user_id: i64,
        category_id: i64,
        date: NaiveDate,
        near_limit_ratio: f64,
    ) -> Result<Option<BudgetAlert>> {
        let BudgetPeriod { year, month } = BudgetPeriod::containing(date);

        let Some(budget) = self.get_budget_for_category(user_id, category_id, year, month)? else {
            return Ok(None);
        };

        let spent = self.get_spent_for_category(user_id, category_id, year, month)?;
        Ok(evaluate_budget(budget.amount, spent, near_limit_ratio))
    }
}
