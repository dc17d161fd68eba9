use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::dates::{self, MonthKey};
use crate::models::Expense;

pub const ALL_HISTORY_LABEL: &str = "All History";

/// Which records a view covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodSelector {
    #[default]
    CurrentMonth,
    AllHistory,
    Month(MonthKey),
}

impl PeriodSelector {
    /// Interpret user input. Unrecognized text falls back to all history.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.eq_ignore_ascii_case("current") || s.eq_ignore_ascii_case("current month") {
            return Self::CurrentMonth;
        }
        if s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("all history") {
            return Self::AllHistory;
        }
        match MonthKey::parse(s) {
            Some(m) => Self::Month(m),
            None => {
                tracing::warn!(selector = s, "unrecognized period, showing all history");
                Self::AllHistory
            }
        }
    }

    /// The month this selector points at, or `None` for all history.
    pub fn month_at(&self, today: NaiveDate) -> Option<MonthKey> {
        match self {
            Self::CurrentMonth => Some(MonthKey::of(today)),
            Self::Month(m) => Some(*m),
            Self::AllHistory => None,
        }
    }

    pub fn label_at(&self, today: NaiveDate) -> String {
        match self.month_at(today) {
            Some(m) => m.label(),
            None => ALL_HISTORY_LABEL.to_string(),
        }
    }

    pub fn is_all_history(&self) -> bool {
        matches!(self, Self::AllHistory)
    }
}

impl fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentMonth => f.write_str("current"),
            Self::AllHistory => f.write_str("all"),
            Self::Month(m) => write!(f, "{m}"),
        }
    }
}

/// Narrow `records` to the selected period, keeping input order.
pub fn filter(records: &[Expense], selector: PeriodSelector) -> (Vec<Expense>, String) {
    filter_at(records, selector, dates::today())
}

pub fn filter_at(records: &[Expense], selector: PeriodSelector, today: NaiveDate) -> (Vec<Expense>, String) {
    let label = selector.label_at(today);
    let Some(target) = selector.month_at(today) else {
        return (records.to_vec(), label);
    };
    let subset = records
        .iter()
        .filter(|e| e.date.month() == Some(target))
        .cloned()
        .collect();
    (subset, label)
}

/// Distinct months present in `records`, newest first. The current month is
/// always included so there is a default to select.
pub fn available_months(records: &[Expense]) -> Vec<MonthKey> {
    available_months_at(records, dates::today())
}

pub fn available_months_at(records: &[Expense], today: NaiveDate) -> Vec<MonthKey> {
    let mut months: BTreeSet<MonthKey> = records.iter().filter_map(|e| e.date.month()).collect();
    months.insert(MonthKey::of(today));
    months.into_iter().rev().collect()
}
