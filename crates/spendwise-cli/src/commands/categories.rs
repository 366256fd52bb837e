//! Category command implementations

use anyhow::Result;

use super::{print_json, truncate, Session};

pub fn cmd_categories_list(session: &Session, json: bool) -> Result<()> {
    let categories = session.db.list_categories(session.user.id)?;

    if json {
        return print_json(&categories);
    }

    if categories.is_empty() {
        println!("No categories yet. Add one with 'spendwise categories add <name>'.");
        return Ok(());
    }

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────");
    for (idx, category) in categories.iter().enumerate() {
        println!("   {:>3}. {}", idx + 1, truncate(&category.name, 40));
    }

    Ok(())
}

pub fn cmd_categories_add(session: &Session, name: &str, json: bool) -> Result<()> {
    let category = session.db.create_category(session.user.id, name)?;

    if json {
        return print_json(&category);
    }

    println!("✅ Category '{}' created (id: {})", category.name, category.id);
    Ok(())
}
