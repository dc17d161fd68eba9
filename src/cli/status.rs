use crate::analysis::period_total;
use crate::error::Result;
use crate::fmt::{format_bytes, money};
use crate::settings::{load_settings, settings_file};
use crate::store::ExpenseStore;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let db_path = settings.db_path();

    println!("Settings:   {}", settings_file().display());
    println!("Data dir:   {}", settings.data_dir);
    println!("Database:   {}", db_path.display());
    println!("Currency:   {}", settings.currency_symbol);

    if !db_path.exists() {
        println!();
        println!("Database not found. Run `spendwise init` to set up.");
        return Ok(());
    }

    let size = std::fs::metadata(&db_path)?.len();
    println!("DB size:    {}", format_bytes(size));

    let store = ExpenseStore::open(&db_path)?;
    let expenses = store.list_all()?;
    let unusable = expenses
        .iter()
        .filter(|e| e.amount.is_none() || e.date.resolve().is_none())
        .count();

    println!();
    println!("Expenses:   {}", store.count()?);
    println!("Total:      {}", money(period_total(&expenses), &settings.currency_symbol));
    println!("Budget:     {}", money(store.get_budget()?, &settings.currency_symbol));
    if unusable > 0 {
        println!("Damaged:    {unusable} (excluded from totals or trends)");
    }
    Ok(())
}
