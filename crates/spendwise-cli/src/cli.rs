//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::commands;

/// Date arguments are checked during parsing, before the store is opened
fn date_arg(s: &str) -> Result<NaiveDate, String> {
    commands::parse_date(s).map_err(|e| e.to_string())
}

/// Spendwise - Track expenses against monthly budgets
#[derive(Parser)]
#[command(name = "spendwise")]
#[command(about = "Personal expense tracker with monthly category budgets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path (defaults to the configured path)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (defaults to ~/.local/share/spendwise/config.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and default user
    Init,

    /// Manage categories (list, add)
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Manage monthly budgets (set, show)
    Budget {
        #[command(subcommand)]
        action: BudgetAction,
    },

    /// Record and list expenses
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },

    /// Generate monthly reports
    Report {
        #[command(subcommand)]
        report_type: ReportType,
    },
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List categories (numbered for selection)
    List,
    /// Add a category
    Add {
        /// Category name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum BudgetAction {
    /// Set or update the budget for a category and month
    Set {
        /// Category number (from `categories list`) or name
        category: String,

        /// Budget amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: f64,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Show the budget and spend for a category and month
    Show {
        /// Category number (from `categories list`) or name
        category: String,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum ExpenseAction {
    /// Record an expense
    Add {
        /// Category number (from `categories list`) or name
        category: String,

        /// Expense amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: f64,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long, value_parser = date_arg)]
        date: Option<NaiveDate>,

        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },
    /// List expenses for a month
    List {
        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Total spending for a month
    Total {
        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Spending vs budget per category for a month
    Summary {
        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
}
