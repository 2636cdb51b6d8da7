//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Personal ledger: income, expenses, budgets and statistics")]
pub struct Cli {
    /// JSON file holding every user (overrides `storage.users_path`).
    #[arg(long, global = true, env = "TALLY_USERS_PATH")]
    pub users: Option<PathBuf>,

    #[command(flatten)]
    pub credentials: Credentials,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct Credentials {
    /// Login of the acting user.
    #[arg(long, global = true, env = "TALLY_LOGIN")]
    pub login: Option<String>,

    /// Password of the acting user.
    #[arg(long, global = true, env = "TALLY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new user with an empty wallet.
    Register,
    /// Record income.
    Income(EntryArgs),
    /// Record an expense.
    Expense(EntryArgs),
    /// Send money to another user.
    Transfer(TransferArgs),
    /// Manage category budgets.
    Budget(Budget),
    /// Totals and category breakdowns.
    Stats(StatsArgs),
    /// Show advisories for the wallet.
    Notifications,
    /// Write the wallet history as CSV.
    Report(ReportArgs),
}

#[derive(Args, Debug)]
pub struct EntryArgs {
    /// Category name.
    #[arg(long)]
    pub category: String,
    /// Positive amount.
    #[arg(long)]
    pub amount: Decimal,
}

#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Login of the recipient.
    #[arg(long)]
    pub to: String,
    /// Positive amount.
    #[arg(long)]
    pub amount: Decimal,
}

#[derive(Args, Debug)]
pub struct Budget {
    #[command(subcommand)]
    pub command: BudgetCommand,
}

#[derive(Subcommand, Debug)]
pub enum BudgetCommand {
    /// Install a budget, counting expenses already recorded in the category.
    Set {
        /// Category name.
        #[arg(long)]
        category: String,
        /// Spending cap.
        #[arg(long)]
        limit: Decimal,
    },
    /// Change the limit of an existing budget.
    Limit {
        /// Category name.
        #[arg(long)]
        category: String,
        /// New spending cap.
        #[arg(long)]
        limit: Decimal,
    },
    /// Move a budget to another category name.
    Rename {
        /// Current category name.
        #[arg(long)]
        from: String,
        /// New category name.
        #[arg(long)]
        to: String,
    },
    /// Remaining amount of a budget.
    Remaining {
        /// Category name.
        #[arg(long)]
        category: String,
    },
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Restrict to these categories (comma separated).
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["from", "to"])]
    pub categories: Vec<String>,
    /// First day, `dd.mm.yyyy`.
    #[arg(long, requires = "to")]
    pub from: Option<String>,
    /// Last day, `dd.mm.yyyy`.
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Exact output file; defaults to a timestamped file in `reports.directory`.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_expense() {
        let cli = Cli::try_parse_from([
            "tally", "--login", "alice", "--password", "pw", "expense", "--category", "food",
            "--amount", "12.50",
        ])
        .unwrap();
        assert_eq!(cli.credentials.login.as_deref(), Some("alice"));
        let Command::Expense(entry) = cli.command else {
            panic!("expected expense");
        };
        assert_eq!(entry.category, "food");
        assert_eq!(entry.amount, dec!(12.50));
    }

    #[test]
    fn test_parse_stats_categories() {
        let cli = Cli::try_parse_from(["tally", "stats", "--categories", "food,taxi"]).unwrap();
        let Command::Stats(stats) = cli.command else {
            panic!("expected stats");
        };
        assert_eq!(stats.categories, ["food", "taxi"]);
    }

    #[test]
    fn test_stats_range_needs_both_ends() {
        assert!(Cli::try_parse_from(["tally", "stats", "--from", "01.01.2024"]).is_err());
    }

    #[test]
    fn test_rejects_bad_amount() {
        assert!(Cli::try_parse_from(["tally", "income", "--category", "x", "--amount", "ten"]).is_err());
    }
}
