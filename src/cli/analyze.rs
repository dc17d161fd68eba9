use colored::Colorize;

use crate::analysis::analyze;
use crate::cli::open_store;
use crate::error::Result;
use crate::fmt::money;
use crate::period::PeriodSelector;

pub fn run(period: &str) -> Result<()> {
    let (settings, store) = open_store()?;
    let symbol = settings.currency_symbol.as_str();
    let trend = analyze(&store.list_all()?, PeriodSelector::parse(period));

    println!("Spending trend for {}", trend.month.label());
    if trend.insufficient_history() {
        println!("{}", "Insufficient data history for trend analysis.".yellow());
        println!("Current: {}", money(trend.current_total, symbol));
        return Ok(());
    }

    let avg = money(trend.historical_average, symbol);
    if trend.is_high {
        println!("{}", format!("High spending! You passed your average of {avg}.").red().bold());
    } else if trend.current_total <= trend.historical_average {
        println!("{}", format!("Good job! You are below your average of {avg}.").green().bold());
    } else {
        println!("{}", format!("On track. You are within 10% of your average of {avg}.").green());
    }
    println!("Current: {}", money(trend.current_total, symbol));
    Ok(())
}
