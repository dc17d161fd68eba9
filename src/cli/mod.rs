pub mod analyze;
pub mod backup;
pub mod budget;
pub mod categories;
pub mod expenses;
pub mod export;
pub mod init;
pub mod months;
pub mod report;
pub mod status;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::settings::{load_settings, Settings};
use crate::store::ExpenseStore;

/// Load settings and open the configured store.
pub(crate) fn open_store() -> Result<(Settings, ExpenseStore)> {
    let settings = load_settings();
    let store = ExpenseStore::open(&settings.db_path())?;
    Ok((settings, store))
}

#[derive(Parser)]
#[command(name = "spendwise", version, about = "Track expenses against a monthly budget.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory and initialize the database.
    Init {
        /// Path for spendwise data (default: ~/Documents/spendwise)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record a new expense.
    Add {
        /// What the money was spent on
        description: String,
        /// Amount spent (must be greater than zero)
        amount: String,
        /// Food, Transport, Bills, Shopping, Entertainment or Other
        #[arg(long, short, default_value = "Other")]
        category: String,
        /// Date: DD/MM/YYYY, YYYY-MM-DD or MM/DD/YYYY (default: today)
        #[arg(long, short)]
        date: Option<String>,
    },
    /// List expenses for a period.
    List {
        /// Period: current, all, or a month such as 03/2026
        #[arg(long, short, default_value = "current")]
        period: String,
    },
    /// Delete an expense by ID.
    Delete {
        /// Expense ID (shown in `spendwise list`)
        id: i64,
    },
    /// Spending by category against the monthly budget.
    Report {
        /// Period: current, all, or a month such as 03/2026
        #[arg(long, short, default_value = "current")]
        period: String,
    },
    /// Show or set the monthly budget.
    Budget {
        #[command(subcommand)]
        command: BudgetCommands,
    },
    /// List months that have expenses, newest first.
    Months,
    /// Compare a month's spending with the average of earlier months.
    Analyze {
        /// Period: current or a month such as 03/2026
        #[arg(long, short, default_value = "current")]
        period: String,
    },
    /// List the expense categories.
    Categories,
    /// Export expenses to CSV.
    Export {
        /// Period: current, all, or a month such as 03/2026
        #[arg(long, short, default_value = "all")]
        period: String,
        /// Output path (default: <data_dir>/exports/expenses-YYYY-MM-DD.csv)
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Back up the database.
    Backup {
        /// Output path (default: <data_dir>/backups/spendwise-YYYYMMDD-HHMMSS.db)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show settings, database location and summary statistics.
    Status,
    /// Print a shell completion script.
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the current monthly budget.
    Show,
    /// Replace the monthly budget.
    Set {
        /// New budget amount
        amount: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::PeriodSelector;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_defaults() {
        let cli = Cli::try_parse_from(["spendwise", "add", "Coffee", "12.5"]).unwrap();
        match cli.command {
            Commands::Add { description, amount, category, date } => {
                assert_eq!(description, "Coffee");
                assert_eq!(amount, "12.5");
                assert_eq!(category, "Other");
                assert!(date.is_none());
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_period_defaults_to_current() {
        let cli = Cli::try_parse_from(["spendwise", "report"]).unwrap();
        match cli.command {
            Commands::Report { period } => {
                assert_eq!(PeriodSelector::parse(&period), PeriodSelector::CurrentMonth)
            }
            _ => panic!("expected report"),
        }
    }
}
