mod analysis;
mod chart;
mod cli;
mod dates;
mod db;
mod error;
mod fmt;
mod logging;
mod models;
mod period;
mod settings;
mod store;

use clap::{CommandFactory, Parser};

use cli::{BudgetCommands, Cli, Commands};

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Add {
            description,
            amount,
            category,
            date,
        } => cli::expenses::add(&description, &amount, &category, date.as_deref()),
        Commands::List { period } => cli::expenses::list(&period),
        Commands::Delete { id } => cli::expenses::delete(id),
        Commands::Report { period } => cli::report::run(&period),
        Commands::Budget { command } => match command {
            BudgetCommands::Show => cli::budget::show(),
            BudgetCommands::Set { amount } => cli::budget::set(&amount),
        },
        Commands::Months => cli::months::run(),
        Commands::Analyze { period } => cli::analyze::run(&period),
        Commands::Categories => cli::categories::run(),
        Commands::Export { period, output } => cli::export::run(&period, output),
        Commands::Backup { output } => cli::backup::run(output),
        Commands::Status => cli::status::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "spendwise", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
