//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `session` - Session setup (config, database, default user) and `init`
//! - `categories` - Category commands (list, add)
//! - `budgets` - Budget commands (set, show)
//! - `expenses` - Expense commands (add with alerts, list)
//! - `reports` - Report commands (monthly total, category summary)

pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod reports;
pub mod session;

// Re-export command functions for main.rs
pub use budgets::*;
pub use categories::*;
pub use expenses::*;
pub use reports::*;
pub use session::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
