//! Report command implementations

use anyhow::Result;
use chrono::{Datelike, Local};
use serde_json::json;
use spendwise_core::models::BudgetPeriod;

use super::{print_json, truncate, Session};

/// Fill in a missing year or month from today's date
pub fn resolve_period(year: Option<i32>, month: Option<u32>) -> (i32, u32) {
    let today = Local::now().date_naive();
    (
        year.unwrap_or_else(|| today.year()),
        month.unwrap_or_else(|| today.month()),
    )
}

pub fn cmd_report_total(session: &Session, year: i32, month: u32, json: bool) -> Result<()> {
    let total = session.db.get_monthly_total(session.user.id, year, month)?;

    if json {
        return print_json(&json!({
            "year": year,
            "month": month,
            "total": total,
        }));
    }

    println!();
    println!(
        "📊 Total spending in {}: {:.2}",
        BudgetPeriod::new(year, month),
        total
    );
    Ok(())
}

pub fn cmd_report_summary(session: &Session, year: i32, month: u32, json: bool) -> Result<()> {
    let rows = session
        .db
        .get_category_summary(session.user.id, year, month)?;

    if json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No expenses recorded for {}.", BudgetPeriod::new(year, month));
        return Ok(());
    }

    println!();
    println!("📊 Spending vs Budget for {}", BudgetPeriod::new(year, month));
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:20} │ {:>10} │ {:>10} │ {:>12}",
        "Category", "Budget", "Spent", "Status"
    );
    println!("   ─────────────────────┼────────────┼────────────┼─────────────");
    for row in &rows {
        let budget = row
            .budget
            .map(|b| format!("{:.2}", b))
            .unwrap_or_else(|| "None".to_string());
        println!(
            "   {:20} │ {:>10} │ {:>10.2} │ {:>12}",
            truncate(&row.category, 20),
            budget,
            row.spent,
            row.status.as_str()
        );
    }

    Ok(())
}
