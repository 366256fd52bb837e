//! Spendwise CLI - Personal expense tracker
//!
//! Usage:
//!   spendwise init                                Create database and default user
//!   spendwise categories add Groceries            Add a category
//!   spendwise budget set 1 -a 200 -y 2025 -m 6    Set a monthly budget
//!   spendwise expense add 1 -a 42.50              Record an expense
//!   spendwise report summary -y 2025 -m 6         Spending vs budget

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    let session = commands::open_session(cli.db.as_deref(), cli.config.as_deref())?;
    let json = cli.json;

    match cli.command {
        Commands::Init => commands::cmd_init(&session),
        Commands::Categories { action } => match action {
            None | Some(CategoriesAction::List) => commands::cmd_categories_list(&session, json),
            Some(CategoriesAction::Add { name }) => {
                commands::cmd_categories_add(&session, &name, json)
            }
        },
        Commands::Budget { action } => match action {
            BudgetAction::Set {
                category,
                amount,
                year,
                month,
            } => {
                let (year, month) = commands::resolve_period(year, month);
                commands::cmd_budget_set(&session, &category, year, month, amount, json)
            }
            BudgetAction::Show {
                category,
                year,
                month,
            } => {
                let (year, month) = commands::resolve_period(year, month);
                commands::cmd_budget_show(&session, &category, year, month, json)
            }
        },
        Commands::Expense { action } => match action {
            ExpenseAction::Add {
                category,
                amount,
                date,
                description,
            } => {
                let date = date.unwrap_or_else(commands::today);
                commands::cmd_expense_add(
                    &session,
                    &category,
                    amount,
                    date,
                    description.as_deref(),
                    json,
                )
            }
            ExpenseAction::List { year, month } => {
                let (year, month) = commands::resolve_period(year, month);
                commands::cmd_expense_list(&session, year, month, json)
            }
        },
        Commands::Report { report_type } => match report_type {
            ReportType::Total { year, month } => {
                let (year, month) = commands::resolve_period(year, month);
                commands::cmd_report_total(&session, year, month, json)
            }
            ReportType::Summary { year, month } => {
                let (year, month) = commands::resolve_period(year, month);
                commands::cmd_report_summary(&session, year, month, json)
            }
        },
    }
}
