//! Domain models for Spendwise

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An account holder. Owns categories, budgets, and expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A spending category, unique per user ignoring case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Monthly spending limit for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// A single recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub amount: f64,
    pub date: NaiveDate,
    /// Empty when none was given
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// How a category's spending compares to its budget for a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    #[serde(rename = "No budget")]
    NoBudget,
    Under,
    Exactly,
    Exceeded,
}

impl BudgetStatus {
    /// Classify spending against an optional budget.
    ///
    /// Equality is exact on the stored amounts, so `Exactly` only appears
    /// when the summed expenses hit the budget to the last bit.
    pub fn classify(spent: f64, budget: Option<f64>) -> Self {
        match budget {
            None => Self::NoBudget,
            Some(budget) if spent < budget => Self::Under,
            Some(budget) if spent == budget => Self::Exactly,
            Some(_) => Self::Exceeded,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoBudget => "No budget",
            Self::Under => "Under",
            Self::Exactly => "Exactly",
            Self::Exceeded => "Exceeded",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the spend-vs-budget report
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummaryRow {
    pub category_id: i64,
    pub category: String,
    /// None when no budget is set for the month
    pub budget: Option<f64>,
    pub spent: f64,
    pub status: BudgetStatus,
}

/// A (year, month) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetPeriod {
    pub year: i32,
    pub month: u32,
}

impl BudgetPeriod {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The period a date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
