//! Budget alerts raised after recording an expense
//!
//! Alerts are derived on demand from the current budget and spend; nothing
//! is persisted.

use serde::Serialize;

/// Warn once the remaining budget is at or below this fraction of it
pub const DEFAULT_NEAR_LIMIT_RATIO: f64 = 0.10;

/// Result of checking a category's spend against its monthly budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BudgetAlert {
    /// Spending is above the budget
    Exceeded { budget: f64, spent: f64 },
    /// Spending is within `near_limit_ratio` of the budget
    NearLimit {
        budget: f64,
        spent: f64,
        remaining: f64,
    },
}

impl BudgetAlert {
    /// Budget minus spend; negative once exceeded
    pub fn remaining(&self) -> f64 {
        match *self {
            Self::Exceeded { budget, spent } => budget - spent,
            Self::NearLimit { remaining, .. } => remaining,
        }
    }
}

/// Compare spend to a budget amount
pub fn evaluate_budget(budget: f64, spent: f64, near_limit_ratio: f64) -> Option<BudgetAlert> {
    let remaining = budget - spent;

    if remaining < 0.0 {
        Some(BudgetAlert::Exceeded { budget, spent })
    } else if remaining <= near_limit_ratio * budget {
        Some(BudgetAlert::NearLimit {
            budget,
            spent,
            remaining,
        })
    } else {
        None
    }
}
