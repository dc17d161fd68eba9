use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::analysis::{budget_status, category_breakdown, totals_by_category};
use crate::chart::render_shares;
use crate::cli::open_store;
use crate::error::Result;
use crate::fmt::money;
use crate::period::{self, PeriodSelector};

pub fn run(period: &str) -> Result<()> {
    let (settings, store) = open_store()?;
    let symbol = settings.currency_symbol.as_str();
    let selector = PeriodSelector::parse(period);
    let all = store.list_all()?;
    let (rows, label) = period::filter(&all, selector);

    let breakdown = category_breakdown(&rows);

    if selector.is_all_history() {
        println!("Overview: All Time History");
        println!("Total spent (all time): {}", money(breakdown.total, symbol).bold());
    } else {
        let status = budget_status(store.get_budget()?, breakdown.total);
        let remaining = if status.is_over() {
            money(status.remaining, symbol).red().bold()
        } else {
            money(status.remaining, symbol).green().bold()
        };
        println!("Overview for {label}");
        println!("Monthly budget: {}", money(status.budget, symbol));
        println!("Total spent:    {}", money(status.spent, symbol));
        println!("Remaining:      {remaining}");
    }
    println!();

    let Some(chart) = render_shares(&totals_by_category(&rows)) else {
        println!("No expenses recorded for {label}.");
        return Ok(());
    };

    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount", "%", "Count"]);
    for item in &breakdown.items {
        table.add_row(vec![
            Cell::new(item.category),
            Cell::new(money(item.total, symbol)),
            Cell::new(format!("{:.1}%", item.pct)),
            Cell::new(item.count),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(money(breakdown.total, symbol)),
        Cell::new(""),
        Cell::new(""),
    ]);
    println!("Expenses by Category\n{table}");
    println!("\nDistribution\n{chart}");
    Ok(())
}
