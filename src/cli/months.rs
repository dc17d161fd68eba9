use comfy_table::{Cell, Table};

use crate::cli::open_store;
use crate::dates::MonthKey;
use crate::error::Result;
use crate::period::available_months;

pub fn run() -> Result<()> {
    let (_settings, store) = open_store()?;
    let months = available_months(&store.list_all()?);
    let current = MonthKey::current();

    let mut table = Table::new();
    table.set_header(vec!["Period", "Month", ""]);
    for m in &months {
        let marker = if *m == current { "current" } else { "" };
        table.add_row(vec![Cell::new(m.token()), Cell::new(m.label()), Cell::new(marker)]);
    }
    println!("Available Months\n{table}");
    Ok(())
}
