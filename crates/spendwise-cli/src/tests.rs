//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use chrono::NaiveDate;
use clap::Parser;
use spendwise_core::db::Database;
use spendwise_core::Config;

use crate::cli::{Cli, Commands, ExpenseAction};
use crate::commands::{self, truncate, Session};

fn setup_session() -> Session {
    let db = Database::in_memory().unwrap();
    Session::new(db, Config::default()).unwrap()
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

fn count_rows(session: &Session, table: &str) -> i64 {
    let conn = session.db.conn().unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}

// ========== Session Tests ==========

#[test]
fn test_session_creates_default_user() {
    let session = setup_session();
    assert_eq!(session.user.name, "Default User");
    assert_eq!(session.user.email, "default@example.com");
}

#[test]
fn test_session_reuses_existing_user() {
    let db = Database::in_memory().unwrap();
    let first = Session::new(db.clone(), Config::default()).unwrap();

    let mut config = Config::default();
    config.user_email = "changed@example.com".to_string();
    let second = Session::new(db, config).unwrap();

    assert_eq!(first.user.id, second.user.id);
    assert_eq!(count_rows(&second, "users"), 1);
}

#[test]
fn test_open_session_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("budget.db");

    let config_path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "[user]\nname = \"Alex\"\nemail = \"alex@example.com\"").unwrap();

    let session = commands::open_session(Some(db_path.as_path()), Some(config_path.as_path())).unwrap();
    assert_eq!(session.user.name, "Alex");
    assert!(db_path.exists());
}

#[test]
fn test_cmd_init() {
    let session = setup_session();
    assert!(commands::cmd_init(&session).is_ok());
}

// ========== Category Command Tests ==========

#[test]
fn test_cmd_categories_add_and_list() {
    let session = setup_session();

    commands::cmd_categories_add(&session, "Groceries", false).unwrap();
    commands::cmd_categories_add(&session, "Transport", true).unwrap();
    assert!(commands::cmd_categories_list(&session, false).is_ok());
    assert!(commands::cmd_categories_list(&session, true).is_ok());

    assert_eq!(count_rows(&session, "categories"), 2);
}

#[test]
fn test_cmd_categories_add_duplicate() {
    let session = setup_session();
    commands::cmd_categories_add(&session, "Groceries", false).unwrap();

    let result = commands::cmd_categories_add(&session, "GROCERIES", false);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("already exists"));
}

#[test]
fn test_resolve_category_missing() {
    let session = setup_session();
    let err = commands::resolve_category(&session, "Nope").unwrap_err();
    assert!(err.to_string().contains("Category not found"));
}

// ========== Budget Command Tests ==========

#[test]
fn test_cmd_budget_set_by_index() {
    let session = setup_session();
    commands::cmd_categories_add(&session, "Groceries", false).unwrap();

    commands::cmd_budget_set(&session, "1", 2025, 6, 200.0, false).unwrap();
    commands::cmd_budget_set(&session, "groceries", 2025, 6, 250.0, false).unwrap();

    assert_eq!(count_rows(&session, "budgets"), 1);
    let category = commands::resolve_category(&session, "1").unwrap();
    let budget = session
        .db
        .get_budget_for_category(session.user.id, category.id, 2025, 6)
        .unwrap()
        .unwrap();
    assert_eq!(budget.amount, 250.0);
}

#[test]
fn test_cmd_budget_set_negative_amount() {
    let session = setup_session();
    commands::cmd_categories_add(&session, "Groceries", false).unwrap();

    let result = commands::cmd_budget_set(&session, "1", 2025, 6, -10.0, false);
    assert!(result.is_err());
    assert_eq!(count_rows(&session, "budgets"), 0);
}

#[test]
fn test_cmd_budget_show() {
    let session = setup_session();
    commands::cmd_categories_add(&session, "Groceries", false).unwrap();

    // Without a budget
    assert!(commands::cmd_budget_show(&session, "1", 2025, 6, false).is_ok());

    commands::cmd_budget_set(&session, "1", 2025, 6, 200.0, false).unwrap();
    assert!(commands::cmd_budget_show(&session, "1", 2025, 6, true).is_ok());
}

// ========== Expense Command Tests ==========

#[test]
fn test_cmd_expense_add_with_alerts() {
    let session = setup_session();
    commands::cmd_categories_add(&session, "Groceries", false).unwrap();
    commands::cmd_budget_set(&session, "Groceries", 2025, 6, 200.0, false).unwrap();

    commands::cmd_expense_add(&session, "Groceries", 50.0, june(2), Some("Market"), false)
        .unwrap();
    commands::cmd_expense_add(&session, "Groceries", 135.0, june(9), None, false).unwrap();
    commands::cmd_expense_add(&session, "Groceries", 25.0, june(20), None, true).unwrap();

    assert_eq!(count_rows(&session, "expenses"), 3);
    assert_eq!(
        session.db.get_monthly_total(session.user.id, 2025, 6).unwrap(),
        210.0
    );
}

#[test]
fn test_cmd_expense_add_zero_amount() {
    let session = setup_session();
    commands::cmd_categories_add(&session, "Groceries", false).unwrap();

    let result = commands::cmd_expense_add(&session, "1", 0.0, june(2), None, false);
    assert!(result.is_err());
    assert_eq!(count_rows(&session, "expenses"), 0);
}

#[test]
fn test_cmd_expense_list() {
    let session = setup_session();
    commands::cmd_categories_add(&session, "Groceries", false).unwrap();
    commands::cmd_expense_add(&session, "1", 12.0, june(2), None, false).unwrap();

    assert!(commands::cmd_expense_list(&session, 2025, 6, false).is_ok());
    assert!(commands::cmd_expense_list(&session, 2025, 7, false).is_ok());
    assert!(commands::cmd_expense_list(&session, 2025, 6, true).is_ok());
}

#[test]
fn test_cmd_expense_add_survives_failed_budget_check() {
    let session = setup_session();
    commands::cmd_categories_add(&session, "Groceries", false).unwrap();

    // Budget lookups now fail, but the insert does not touch this table
    session
        .db
        .conn()
        .unwrap()
        .execute_batch("DROP TABLE budgets")
        .unwrap();

    let result = commands::cmd_expense_add(&session, "Groceries", 12.0, june(2), None, false);
    assert!(result.is_ok());
    assert_eq!(count_rows(&session, "expenses"), 1);
}

#[test]
fn test_parse_date() {
    assert_eq!(commands::parse_date("2025-06-15").unwrap(), june(15));
    assert!(commands::parse_date("15/06/2025").is_err());
    assert!(commands::parse_date("2025-02-30").is_err());

    let today = chrono::Local::now().date_naive();
    assert_eq!(commands::parse_date("  ").unwrap(), today);
    assert_eq!(commands::today(), today);
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_bad_date_rejected_before_store_is_opened() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("budget.db");
    let db_arg = db_path.to_str().unwrap();

    let result = Cli::try_parse_from([
        "spendwise", "--db", db_arg, "expense", "add", "Food", "-a", "5", "-d", "15/06/2025",
    ]);
    assert!(result.is_err());
    assert!(!db_path.exists());
}

#[test]
fn test_date_argument_parsed() {
    let cli = Cli::try_parse_from([
        "spendwise", "expense", "add", "Food", "-a", "5", "-d", "2025-06-15",
    ])
    .unwrap();

    match cli.command {
        Commands::Expense {
            action: ExpenseAction::Add { date, .. },
        } => assert_eq!(date, Some(june(15))),
        _ => panic!("expected expense add"),
    }
}

#[test]
fn test_month_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["spendwise", "report", "total", "-m", "13"]).is_err());
    assert!(Cli::try_parse_from(["spendwise", "report", "summary", "-m", "0"]).is_err());
    assert!(Cli::try_parse_from(["spendwise", "expense", "list", "-m", "12"]).is_ok());
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_report_total_and_summary() {
    let session = setup_session();
    commands::cmd_categories_add(&session, "Groceries", false).unwrap();
    commands::cmd_categories_add(&session, "Travel", false).unwrap();
    commands::cmd_budget_set(&session, "Groceries", 2025, 6, 200.0, false).unwrap();
    commands::cmd_expense_add(&session, "Groceries", 110.0, june(5), None, false).unwrap();
    commands::cmd_expense_add(&session, "Travel", 80.0, june(6), None, false).unwrap();

    assert!(commands::cmd_report_total(&session, 2025, 6, false).is_ok());
    assert!(commands::cmd_report_total(&session, 2025, 6, true).is_ok());
    assert!(commands::cmd_report_summary(&session, 2025, 6, false).is_ok());
    assert!(commands::cmd_report_summary(&session, 2025, 6, true).is_ok());
    assert!(commands::cmd_report_summary(&session, 2025, 7, false).is_ok());
}

#[test]
fn test_cmd_report_invalid_month() {
    let session = setup_session();
    assert!(commands::cmd_report_total(&session, 2025, 13, false).is_err());
}

#[test]
fn test_resolve_period_defaults() {
    use chrono::Datelike;

    assert_eq!(commands::resolve_period(Some(2024), Some(2)), (2024, 2));

    let today = chrono::Local::now().date_naive();
    let (year, month) = commands::resolve_period(None, None);
    // Tolerate a month rollover between the two clock reads
    assert!(year == today.year() || year == today.year() + 1);
    assert!((1..=12).contains(&month));
}

// ========== Utility Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a very long category name", 10), "a very ...");
    assert_eq!(truncate("Café crème brûlée", 8), "Café ...");
}
