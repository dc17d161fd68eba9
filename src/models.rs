use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::ExpenseDate;
use crate::error::SpendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Bills,
    Shopping,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Bills,
        Category::Shopping,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = SpendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| SpendError::UnknownCategory(s.to_string()))
    }
}

/// Largest amount accepted for a single expense or budget. Keeps sums of
/// many records finite.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// A non-negative money amount no larger than [`MAX_AMOUNT`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && (0.0..=MAX_AMOUNT).contains(&value)).then_some(Self(value))
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim().replace(',', "");
        Self::new(s.parse().ok()?)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = SpendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s).ok_or_else(|| SpendError::InvalidAmount(s.to_string()))
    }
}

/// An expense as read back from the store.
///
/// `amount` is `None` when the stored value could not be interpreted; such
/// records still list but never count towards a total.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: Option<i64>,
    pub date: ExpenseDate,
    pub category: Category,
    pub description: String,
    pub amount: Option<Amount>,
}

impl Expense {
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.map(|a| a.value())
    }
}

/// A validated expense ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub description: String,
    pub amount: Amount,
}

impl NewExpense {
    /// Validates raw entry-form input. The amount must be strictly positive.
    pub fn parse(date: &str, category: &str, description: &str, amount: &str) -> crate::error::Result<Self> {
        let date = crate::dates::parse_date(date).ok_or_else(|| SpendError::InvalidDate(date.to_string()))?;
        let category: Category = category.parse()?;
        let description = description.trim();
        if description.is_empty() {
            return Err(SpendError::EmptyDescription);
        }
        let amount: Amount = amount.parse()?;
        if amount.value() == 0.0 {
            return Err(SpendError::InvalidAmount("amount must be greater than zero".to_string()));
        }
        Ok(Self {
            date,
            category,
            description: description.to_string(),
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" Entertainment ".parse::<Category>().unwrap(), Category::Entertainment);
        assert!(matches!("Rent".parse::<Category>(), Err(SpendError::UnknownCategory(_))));
    }

    #[test]
    fn test_amount_rejects_negative_and_garbage() {
        assert_eq!(Amount::parse("42.50").map(|a| a.value()), Some(42.5));
        assert_eq!(Amount::parse("1,200").map(|a| a.value()), Some(1200.0));
        assert_eq!(Amount::parse("0").map(|a| a.value()), Some(0.0));
        assert!(Amount::parse("-5").is_none());
        assert!(Amount::parse("abc").is_none());
        assert!(Amount::parse("NaN").is_none());
        assert!(Amount::parse("inf").is_none());
    }

    #[test]
    fn test_new_expense_parse_valid() {
        let e = NewExpense::parse("01/03/2026", "food", "  Groceries ", "50").unwrap();
        assert_eq!(e.date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(e.category, Category::Food);
        assert_eq!(e.description, "Groceries");
        assert_eq!(e.amount.value(), 50.0);
    }

    #[test]
    fn test_new_expense_parse_rejects_bad_input() {
        assert!(matches!(
            NewExpense::parse("nope", "Food", "x", "1"),
            Err(SpendError::InvalidDate(_))
        ));
        assert!(matches!(
            NewExpense::parse("01/03/2026", "Food", "   ", "1"),
            Err(SpendError::EmptyDescription)
        ));
        assert!(matches!(
            NewExpense::parse("01/03/2026", "Food", "x", "0"),
            Err(SpendError::InvalidAmount(_))
        ));
        assert!(matches!(
            NewExpense::parse("01/03/2026", "Food", "x", "-3"),
            Err(SpendError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_oversized_amounts_are_rejected() {
        assert!(Amount::new(MAX_AMOUNT).is_some());
        assert!(Amount::new(1e308).is_none());
        assert!(matches!(
            NewExpense::parse("01/03/2026", "Food", "x", "1e308"),
            Err(SpendError::InvalidAmount(_))
        ));
        let total: f64 = (0..1000).filter_map(|_| Amount::new(MAX_AMOUNT)).map(|a| a.value()).sum();
        assert!(total.is_finite());
    }
}
