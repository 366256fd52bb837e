//! Spendwise Core Library
//!
//! Shared functionality for the Spendwise expense tracker:
//! - Database access and migrations
//! - Category, budget, and expense operations
//! - Monthly spending reports and budget status classification
//! - Budget alerts after recording an expense
//! - Configuration loading

pub mod alerts;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod period;

pub use alerts::{evaluate_budget, BudgetAlert, DEFAULT_NEAR_LIMIT_RATIO};
pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use period::month_date_range;
