//! Expense command implementations

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde_json::json;
use spendwise_core::models::BudgetPeriod;
use spendwise_core::BudgetAlert;
use tracing::warn;

use super::{print_json, resolve_category, truncate, Session};

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date; blank means today
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    match input.trim() {
        "" => Ok(today()),
        s => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format: {} (use YYYY-MM-DD)", s)),
    }
}

pub fn cmd_expense_add(
    session: &Session,
    category: &str,
    amount: f64,
    date: NaiveDate,
    description: Option<&str>,
    json: bool,
) -> Result<()> {
    let category = resolve_category(session, category)?;
    let user_id = session.user.id;

    let expense = session
        .db
        .add_expense(user_id, category.id, amount, date, description)?;

    // The expense is already saved, so a failed check only loses the alert
    let alert = match session.db.check_budget_alert(
        user_id,
        category.id,
        expense.date,
        session.config.near_limit_ratio,
    ) {
        Ok(alert) => alert,
        Err(e) => {
            warn!(expense_id = expense.id, "Budget check failed: {}", e);
            None
        }
    };

    if json {
        return print_json(&json!({
            "expense": expense,
            "alert": alert,
        }));
    }

    println!(
        "✅ Expense of {:.2} added in '{}' on {}",
        expense.amount, category.name, expense.date
    );

    let period = BudgetPeriod::containing(expense.date);
    match alert {
        Some(BudgetAlert::Exceeded { budget, spent }) => {
            println!(
                "⚠️  ALERT: You exceeded the budget for '{}' in {}. Budget: {:.2}, Spent: {:.2}",
                category.name, period, budget, spent
            );
        }
        Some(BudgetAlert::NearLimit { remaining, .. }) => {
            println!(
                "⚠️  WARNING: Only {:.2} left in your '{}' budget for {}.",
                remaining, category.name, period
            );
        }
        None => {}
    }

    Ok(())
}

pub fn cmd_expense_list(session: &Session, year: i32, month: u32, json: bool) -> Result<()> {
    let expenses = session.db.list_expenses(session.user.id, year, month)?;

    if json {
        return print_json(&expenses);
    }

    if expenses.is_empty() {
        println!("No expenses recorded for {}.", BudgetPeriod::new(year, month));
        return Ok(());
    }

    let categories = session.db.list_categories(session.user.id)?;
    let category_name = |id: i64| {
        categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or("?")
    };

    println!();
    println!("🧾 Expenses for {}", BudgetPeriod::new(year, month));
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:>5} │ {:10} │ {:18} │ {:>10} │ Description",
        "ID", "Date", "Category", "Amount"
    );
    println!("   ──────┼────────────┼────────────────────┼────────────┼────────────");
    for expense in &expenses {
        println!(
            "   {:>5} │ {:10} │ {:18} │ {:>10.2} │ {}",
            expense.id,
            expense.date.to_string(),
            truncate(category_name(expense.category_id), 18),
            expense.amount,
            truncate(&expense.description, 30)
        );
    }

    Ok(())
}

