use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{Connection, Row};

use crate::dates::ExpenseDate;
use crate::db::{get_connection, get_metadata, init_db, set_metadata};
use crate::error::{Result, SpendError};
use crate::models::{Amount, Category, Expense, NewExpense};

const BUDGET_KEY: &str = "monthly_budget";

/// SQLite-backed persistence for expenses and the monthly budget.
pub struct ExpenseStore {
    conn: Connection,
}

impl ExpenseStore {
    /// Open an existing store. A missing database file is reported as
    /// [`SpendError::StoreUnavailable`] rather than silently created empty.
    pub fn open(db_path: &Path) -> Result<Self> {
        if !db_path.exists() {
            return Err(SpendError::StoreUnavailable(db_path.to_path_buf()));
        }
        let conn = get_connection(db_path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Create the database if needed and bring the schema up to date.
    pub fn create(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = get_connection(db_path)?;
        init_db(&conn)?;
        tracing::info!(path = %db_path.display(), "expense store ready");
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn list_all(&self) -> Result<Vec<Expense>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, date, category, description, amount FROM expenses ORDER BY id")?;
        let rows = stmt.query_map([], row_to_expense)?;
        let expenses = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        tracing::debug!(count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    pub fn get(&self, id: i64) -> Result<Option<Expense>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, date, category, description, amount FROM expenses WHERE id = ?1")?;
        let mut rows = stmt.query_map([id], row_to_expense)?;
        let expense = rows.next().transpose()?;
        Ok(expense)
    }

    pub fn add(&self, expense: &NewExpense) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO expenses (date, category, description, amount) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                expense.date.format("%Y-%m-%d").to_string(),
                expense.category.name(),
                expense.description,
                expense.amount.value(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, category = %expense.category, amount = expense.amount.value(), "expense added");
        Ok(id)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let removed = self.conn.execute("DELETE FROM expenses WHERE id = ?1", [id])?;
        if removed == 0 {
            return Err(SpendError::NotFound(id));
        }
        tracing::info!(id, "expense deleted");
        Ok(())
    }

    pub fn count(&self) -> Result<i64> {
        Ok(self.conn.query_row("SELECT count(*) FROM expenses", [], |r| r.get(0))?)
    }

    /// The monthly budget, 0 when never set.
    pub fn get_budget(&self) -> Result<f64> {
        let Some(raw) = get_metadata(&self.conn, BUDGET_KEY)? else {
            return Ok(0.0);
        };
        match Amount::parse(&raw) {
            Some(a) => Ok(a.value()),
            None => {
                tracing::warn!(value = %raw, "stored budget is not a valid amount, treating as 0");
                Ok(0.0)
            }
        }
    }

    pub fn set_budget(&self, budget: f64) -> Result<()> {
        let amount = Amount::new(budget).ok_or_else(|| SpendError::InvalidAmount(budget.to_string()))?;
        set_metadata(&self.conn, BUDGET_KEY, &amount.value().to_string())?;
        tracing::info!(budget = amount.value(), "budget updated");
        Ok(())
    }
}

/// Rows are read leniently: the column affinity does not stop a hand-edited
/// database from holding text where a number belongs.
fn row_to_expense(row: &Row) -> rusqlite::Result<Expense> {
    let id: i64 = row.get(0)?;
    let date = match row.get::<_, Value>(1)? {
        Value::Text(s) => ExpenseDate::from_text(&s),
        other => ExpenseDate::Text(value_to_string(&other)),
    };
    let raw_category = value_to_string(&row.get::<_, Value>(2)?);
    let category = raw_category.parse().unwrap_or_else(|_| {
        tracing::warn!(id, category = %raw_category, "unknown stored category, using Other");
        Category::Other
    });
    let description = value_to_string(&row.get::<_, Value>(3)?);
    let amount = match row.get::<_, Value>(4)? {
        Value::Real(v) => Amount::new(v),
        Value::Integer(v) => Amount::new(v as f64),
        Value::Text(s) => Amount::parse(&s),
        _ => None,
    };
    if amount.is_none() {
        tracing::warn!(id, "stored amount is not a valid amount, excluded from totals");
    }
    Ok(Expense {
        id: Some(id),
        date,
        category,
        description,
        amount,
    })
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(v) => v.to_string(),
        Value::Real(v) => v.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(_) => "<blob>".to_string(),
    }
}
