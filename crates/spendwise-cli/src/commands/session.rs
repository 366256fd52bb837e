//! Session setup and shared utilities
//!
//! This module contains:
//! - `open_session` - Load config, open the database, resolve the default user
//! - `resolve_category` - Turn a CLI category selector into a category
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use spendwise_core::db::Database;
use spendwise_core::models::{Category, User};
use spendwise_core::Config;
use tracing::debug;

/// Everything a command needs: the store, the acting user, and config
pub struct Session {
    pub db: Database,
    pub user: User,
    pub config: Config,
}

impl Session {
    /// Bind a session to an open database, creating the default user if needed
    pub fn new(db: Database, config: Config) -> Result<Self> {
        let user = db
            .ensure_default_user(&config.user_name, &config.user_email)
            .context("Failed to resolve default user")?;
        Ok(Self { db, user, config })
    }
}

/// Open the database named on the command line, or the configured one
pub fn open_session(db_path: Option<&Path>, config_path: Option<&Path>) -> Result<Session> {
    let config = Config::load(config_path).context("Failed to load configuration")?;

    let path = db_path.unwrap_or(config.database_path.as_path());
    let path_str = path
        .to_str()
        .with_context(|| format!("Database path is not valid UTF-8: {}", path.display()))?;
    debug!("Opening database at {}", path_str);
    let db = Database::new(path_str).context("Failed to open database")?;

    Session::new(db, config)
}

/// Find a category by list number or name, failing with a hint if missing
pub fn resolve_category(session: &Session, selector: &str) -> Result<Category> {
    session
        .db
        .find_category(session.user.id, selector)?
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Category not found: {}. Run 'spendwise categories list' to see choices.",
                selector
            )
        })
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn cmd_init(session: &Session) -> Result<()> {
    println!("🔧 Database ready at {}", session.db.path());
    println!(
        "   Default user: {} <{}> (id: {})",
        session.user.name, session.user.email, session.user.id
    );
    println!("✅ Spendwise initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add a category: spendwise categories add Groceries");
    println!("  2. Set a budget:   spendwise budget set Groceries --amount 200");
    println!("  3. Add expenses:   spendwise expense add Groceries --amount 42.50");

    Ok(())
}
