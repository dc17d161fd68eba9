use std::path::{Path, PathBuf};

use crate::cli::open_store;
use crate::error::Result;
use crate::models::Expense;
use crate::period::{self, PeriodSelector};

fn default_path(data_dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    data_dir.join("exports").join(format!("expenses-{date}.csv"))
}

/// Write expenses as `Date,Category,Description,Amount`. Records without a
/// valid amount are written with an empty amount cell.
pub fn write_csv(path: &Path, expenses: &[Expense]) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["Date", "Category", "Description", "Amount"])?;
    for e in expenses {
        let amount = e.amount_value().map(|v| format!("{v:.2}")).unwrap_or_default();
        wtr.write_record([
            e.date.display(),
            e.category.to_string(),
            e.description.clone(),
            amount,
        ])?;
    }
    wtr.flush()?;
    Ok(expenses.len())
}

pub fn run(period: &str, output: Option<String>) -> Result<()> {
    let (settings, store) = open_store()?;
    let (rows, label) = period::filter(&store.list_all()?, PeriodSelector::parse(period));

    let path = match output {
        Some(p) => PathBuf::from(p),
        None => default_path(&settings.data_path()),
    };
    let written = write_csv(&path, &rows)?;
    println!("Exported {written} expenses ({label}) to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::ExpenseDate;
    use crate::models::{Amount, Category};

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let expenses = vec![
            Expense {
                id: Some(1),
                date: ExpenseDate::from_text("2026-03-01"),
                category: Category::Food,
                description: "Groceries, weekly".to_string(),
                amount: Amount::new(50.0),
            },
            Expense {
                id: Some(2),
                date: ExpenseDate::Text("someday".to_string()),
                category: Category::Other,
                description: "Broken".to_string(),
                amount: None,
            },
        ];
        assert_eq!(write_csv(&path, &expenses).unwrap(), 2);
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Date,Category,Description,Amount");
        assert_eq!(lines[1], "01/03/2026,Food,\"Groceries, weekly\",50.00");
        assert_eq!(lines[2], "someday,Other,Broken,");
    }
}
