use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Layouts tried in order by [`parse_date`]. Day-first wins for ambiguous
/// input such as `01/03/2026`.
const DATE_LAYOUTS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d", "%m/%d/%Y"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a calendar date, trying each known layout in priority order.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(raw, layout).ok())
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The date of an expense as handed over by the store: either a real date or
/// text that could not be parsed when it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseDate {
    Native(NaiveDate),
    Text(String),
}

impl ExpenseDate {
    pub fn from_text(raw: &str) -> Self {
        match parse_date(raw) {
            Some(d) => Self::Native(d),
            None => Self::Text(raw.to_string()),
        }
    }

    pub fn resolve(&self) -> Option<NaiveDate> {
        match self {
            Self::Native(d) => Some(*d),
            Self::Text(raw) => parse_date(raw),
        }
    }

    pub fn month(&self) -> Option<MonthKey> {
        self.resolve().map(MonthKey::of)
    }

    /// `DD/MM/YYYY` for dates, the raw text otherwise.
    pub fn display(&self) -> String {
        let render = |d: NaiveDate| d.format("%d/%m/%Y").to_string();
        match self {
            Self::Native(d) => render(*d),
            Self::Text(raw) => parse_date(raw).map(render).unwrap_or_else(|| raw.clone()),
        }
    }
}

/// A calendar month bucket. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(today())
    }

    /// Accepts `MM/YYYY`, `YYYY-MM` and `March 2026`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some((m, y)) = raw.split_once('/') {
            return Self::new(y.trim().parse().ok()?, m.trim().parse().ok()?);
        }
        if let Some((y, m)) = raw.split_once('-') {
            if y.len() == 4 {
                return Self::new(y.parse().ok()?, m.parse().ok()?);
            }
            return None;
        }
        let (name, y) = raw.split_once(char::is_whitespace)?;
        let idx = MONTH_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))?;
        Self::new(y.trim().parse().ok()?, idx as u32 + 1)
    }

    /// Selector token, e.g. `03/2026`.
    pub fn token(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }

    /// Human label, e.g. `March 2026`.
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize - 1], self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}
