//! Budget command implementations

use anyhow::Result;
use serde_json::json;
use spendwise_core::models::{BudgetPeriod, BudgetStatus};

use super::{print_json, resolve_category, Session};

pub fn cmd_budget_set(
    session: &Session,
    category: &str,
    year: i32,
    month: u32,
    amount: f64,
    json: bool,
) -> Result<()> {
    let category = resolve_category(session, category)?;
    let budget = session
        .db
        .set_budget(session.user.id, category.id, year, month, amount)?;

    if json {
        return print_json(&budget);
    }

    println!(
        "✅ Budget set for category '{}' ({}) = {:.2}",
        category.name,
        BudgetPeriod::new(year, month),
        budget.amount
    );
    Ok(())
}

pub fn cmd_budget_show(
    session: &Session,
    category: &str,
    year: i32,
    month: u32,
    json: bool,
) -> Result<()> {
    let category = resolve_category(session, category)?;
    let user_id = session.user.id;

    let budget = session
        .db
        .get_budget_for_category(user_id, category.id, year, month)?;
    let spent = session
        .db
        .get_spent_for_category(user_id, category.id, year, month)?;
    let amount = budget.as_ref().map(|b| b.amount);
    let status = BudgetStatus::classify(spent, amount);

    if json {
        return print_json(&json!({
            "category": category.name,
            "year": year,
            "month": month,
            "budget": amount,
            "spent": spent,
            "status": status,
        }));
    }

    println!();
    println!("💰 {} ({})", category.name, BudgetPeriod::new(year, month));
    println!("   ─────────────────────────────────────────");
    match amount {
        Some(amount) => {
            println!("   Budget:    {:>10.2}", amount);
            println!("   Spent:     {:>10.2}", spent);
            println!("   Remaining: {:>10.2}", amount - spent);
        }
        None => {
            println!("   Budget:    (not set)");
            println!("   Spent:     {:>10.2}", spent);
        }
    }
    println!("   Status:    {}", status);

    Ok(())
}
