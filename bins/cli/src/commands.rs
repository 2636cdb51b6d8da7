//! Subcommand execution against a logged-in session.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use chrono::Local;
use rust_decimal::Decimal;
use tally_core::auth::{AuthService, UserRepository};
use tally_core::budget::BudgetService;
use tally_core::ledger::LedgerService;
use tally_core::notify::{NotificationService, NotificationThresholds};
use tally_core::stats::StatisticsService;
use tally_shared::AppConfig;
use tally_shared::types::{format_amount, format_percent};
use tally_store::{write_report, write_report_to};
use tracing::{info, warn};

use crate::args::{BudgetCommand, Command, Credentials, StatsArgs};

/// Runs `command`, opening and closing a session as needed.
pub fn run<R>(
    auth: &mut AuthService<R>,
    credentials: &Credentials,
    command: Command,
    config: &AppConfig,
) -> Result<()>
where
    R: UserRepository,
{
    let (login, password) = match (&credentials.login, &credentials.password) {
        (Some(login), Some(password)) => (login.as_str(), password.as_str()),
        _ => bail!("--login and --password are required"),
    };

    if matches!(command, Command::Register) {
        auth.register(login, password)
            .with_context(|| format!("Could not register {login}"))?;
        info!(login, "User registered");
        println!("Registered {login}");
        return auth.logout().context("Could not save users");
    }

    auth.authenticate(login, password)
        .with_context(|| format!("Could not log in as {login}"))?;

    let outcome = execute(auth, command, config);

    let thresholds = NotificationThresholds::from(&config.notifications);
    if let Ok(user) = auth.current_user() {
        for message in NotificationService::messages(user.wallet(), &thresholds) {
            println!("! {message}");
        }
    }

    auth.logout().context("Could not save users")?;
    outcome
}

fn execute<R>(auth: &mut AuthService<R>, command: Command, config: &AppConfig) -> Result<()>
where
    R: UserRepository,
{
    match command {
        Command::Register => bail!("register does not run inside a session"),
        Command::Income(entry) => {
            let wallet = auth.current_user_mut()?.wallet_mut();
            LedgerService::add_income(wallet, &entry.category, entry.amount)?;
            println!("Income recorded. Balance: {}", format_amount(wallet.balance()));
        }
        Command::Expense(entry) => {
            let wallet = auth.current_user_mut()?.wallet_mut();
            LedgerService::add_expense(wallet, &entry.category, entry.amount)?;
            println!("Expense recorded. Balance: {}", format_amount(wallet.balance()));
        }
        Command::Transfer(transfer) => {
            auth.transfer_to(&transfer.to, transfer.amount)?;
            info!(to = %transfer.to, amount = %transfer.amount, "Transfer completed");
            println!(
                "Sent {} to {}. Balance: {}",
                format_amount(transfer.amount),
                transfer.to,
                format_amount(auth.current_user()?.wallet().balance())
            );
        }
        Command::Budget(budget) => budget_command(auth, budget.command)?,
        Command::Stats(args) => stats(auth, &args)?,
        Command::Notifications => {}
        Command::Report(report) => {
            let wallet = auth.current_user()?.wallet();
            let now = Local::now().naive_local();
            let path = match report.output {
                Some(path) => {
                    write_report_to(wallet, &path, now)?;
                    path
                }
                None => write_report(wallet, &config.reports.directory, now)?,
            };
            println!("Report saved to {}", path.display());
        }
    }
    Ok(())
}

fn budget_command<R>(auth: &mut AuthService<R>, command: BudgetCommand) -> Result<()>
where
    R: UserRepository,
{
    let wallet = auth.current_user_mut()?.wallet_mut();
    match command {
        BudgetCommand::Set { category, limit } => {
            BudgetService::set_budget(wallet, &category, limit)?;
            println!(
                "Budget for {category} set to {} (remaining: {})",
                format_amount(limit),
                format_amount(BudgetService::remaining(wallet, &category))
            );
        }
        BudgetCommand::Limit { category, limit } => {
            BudgetService::update_budget_limit(wallet, &category, limit)?;
            println!("Budget for {category} limited to {}", format_amount(limit));
        }
        BudgetCommand::Rename { from, to } => {
            if let Some(displaced) = BudgetService::rename_budget_category(wallet, &from, &to)? {
                warn!(
                    category = %to,
                    limit = %displaced.limit(),
                    spent = %displaced.spent(),
                    "Rename replaced an existing budget"
                );
            }
            println!("Budget {from} renamed to {to}");
        }
        BudgetCommand::Remaining { category } => {
            println!(
                "Remaining for {category}: {}",
                format_amount(BudgetService::remaining(wallet, &category))
            );
        }
    }
    Ok(())
}

fn stats<R>(auth: &AuthService<R>, args: &StatsArgs) -> Result<()>
where
    R: UserRepository,
{
    let wallet = auth.current_user()?.wallet();

    if !args.categories.is_empty() {
        let categories = args.categories.iter().map(String::as_str);
        print_section(
            "Income",
            StatisticsService::total_income_in(wallet, categories.clone())?,
            &StatisticsService::income_by_category_in(wallet, categories.clone())?,
        );
        print_section(
            "Expense",
            StatisticsService::total_expense_in(wallet, categories.clone())?,
            &StatisticsService::expense_by_category_in(wallet, categories)?,
        );
        return Ok(());
    }

    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        print_section(
            "Income",
            StatisticsService::total_income_between(wallet, from, to)?,
            &StatisticsService::income_by_category_between(wallet, from, to)?,
        );
        print_section(
            "Expense",
            StatisticsService::total_expense_between(wallet, from, to)?,
            &StatisticsService::expense_by_category_between(wallet, from, to)?,
        );
        return Ok(());
    }

    let summary = StatisticsService::summary(wallet);
    println!("Balance: {}", format_amount(summary.balance));
    print_section("Income", summary.total_income, &summary.income_by_category);
    print_section("Expense", summary.total_expense, &summary.expense_by_category);
    if !summary.budgets.is_empty() {
        println!("Budgets:");
        for budget in &summary.budgets {
            println!(
                "  {}: limit {}, spent {}, remaining {} ({}%)",
                budget.category,
                format_amount(budget.limit),
                format_amount(budget.spent),
                format_amount(budget.remaining),
                format_percent(budget.usage_percentage)
            );
        }
    }
    Ok(())
}

fn print_section(title: &str, total: Decimal, by_category: &BTreeMap<String, Decimal>) {
    println!("{title}: {}", format_amount(total));
    for (category, amount) in by_category {
        println!("  {category}: {}", format_amount(*amount));
    }
}
