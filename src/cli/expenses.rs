use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::analysis::period_total;
use crate::cli::open_store;
use crate::dates;
use crate::error::Result;
use crate::fmt::money;
use crate::models::NewExpense;
use crate::period::{self, PeriodSelector};

pub fn add(description: &str, amount: &str, category: &str, date: Option<&str>) -> Result<()> {
    let (settings, store) = open_store()?;
    let date = match date {
        Some(d) => d.to_string(),
        None => dates::today().format("%d/%m/%Y").to_string(),
    };
    let expense = NewExpense::parse(&date, category, description, amount)?;
    let id = store.add(&expense)?;
    println!(
        "Added #{id}: {} [{}] {} ({})",
        expense.date.format("%d/%m/%Y"),
        expense.category,
        expense.description,
        money(expense.amount.value(), &settings.currency_symbol),
    );
    Ok(())
}

pub fn list(period: &str) -> Result<()> {
    let (settings, store) = open_store()?;
    let selector = PeriodSelector::parse(period);
    let all = store.list_all()?;
    let (rows, label) = period::filter(&all, selector);

    if rows.is_empty() {
        println!("No expenses found for {label}.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Date", "Category", "Description", "Amount"]);
    for (i, e) in rows.iter().enumerate() {
        let amount = match e.amount_value() {
            Some(v) => money(v, &settings.currency_symbol),
            None => "invalid".red().to_string(),
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(e.id.map(|id| id.to_string()).unwrap_or_default()),
            Cell::new(e.date.display()),
            Cell::new(e.category),
            Cell::new(&e.description),
            Cell::new(amount),
        ]);
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new("Total".bold()),
        Cell::new(money(period_total(&rows), &settings.currency_symbol)),
    ]);

    println!("Expenses for {label}\n{table}");
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let (_settings, store) = open_store()?;
    let existing = store.get(id)?;
    store.delete(id)?;
    match existing {
        Some(e) => println!("Deleted #{id}: {}", e.description),
        None => println!("Deleted #{id}"),
    }
    Ok(())
}
