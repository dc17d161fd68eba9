use crate::cli::open_store;
use crate::error::{Result, SpendError};
use crate::fmt::money;
use crate::models::Amount;

pub fn show() -> Result<()> {
    let (settings, store) = open_store()?;
    let budget = store.get_budget()?;
    if budget > 0.0 {
        println!("Monthly budget: {}", money(budget, &settings.currency_symbol));
    } else {
        println!("No monthly budget set. Use `spendwise budget set <amount>`.");
    }
    Ok(())
}

pub fn set(amount: &str) -> Result<()> {
    let (settings, store) = open_store()?;
    let amount = Amount::parse(amount).ok_or_else(|| SpendError::InvalidAmount(amount.to_string()))?;
    store.set_budget(amount.value())?;
    println!("Budget updated: {}", money(amount.value(), &settings.currency_symbol));
    Ok(())
}
