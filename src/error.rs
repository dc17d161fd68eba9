use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpendError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Expense store unavailable at {}. Run `spendwise init` first.", .0.display())]
    StoreUnavailable(PathBuf),

    #[error("No expense with id {0}")]
    NotFound(i64),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date: {0} (use DD/MM/YYYY)")]
    InvalidDate(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, SpendError>;
