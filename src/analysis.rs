use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::dates::{self, MonthKey};
use crate::models::{Category, Expense};
use crate::period::PeriodSelector;

/// Spending above `average * HIGH_SPENDING_TOLERANCE` is flagged as high.
pub const HIGH_SPENDING_TOLERANCE: f64 = 1.1;

// ---------------------------------------------------------------------------
// By category
// ---------------------------------------------------------------------------

/// Sum of valid amounts per category. Only categories that occur appear.
pub fn totals_by_category(records: &[Expense]) -> BTreeMap<Category, f64> {
    let mut totals = BTreeMap::new();
    for e in records {
        if let Some(amount) = e.amount_value() {
            *totals.entry(e.category).or_insert(0.0) += amount;
        }
    }
    totals
}

pub fn period_total(records: &[Expense]) -> f64 {
    records.iter().filter_map(Expense::amount_value).sum()
}

pub struct CategoryItem {
    pub category: Category,
    pub total: f64,
    pub count: usize,
    pub pct: f64,
}

pub struct CategoryBreakdown {
    pub items: Vec<CategoryItem>,
    pub total: f64,
}

/// Per-category totals with counts and share of the period total, largest
/// first.
pub fn category_breakdown(records: &[Expense]) -> CategoryBreakdown {
    let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
    for e in records.iter().filter(|e| e.amount.is_some()) {
        *counts.entry(e.category).or_insert(0) += 1;
    }
    let totals = totals_by_category(records);
    let total: f64 = totals.values().sum();

    let mut items: Vec<CategoryItem> = totals
        .into_iter()
        .map(|(category, t)| CategoryItem {
            category,
            total: t,
            count: counts.get(&category).copied().unwrap_or(0),
            pct: if total != 0.0 { t / total * 100.0 } else { 0.0 },
        })
        .collect();
    items.sort_by(|a, b| b.total.total_cmp(&a.total));

    CategoryBreakdown { items, total }
}

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendAnalysis {
    pub month: MonthKey,
    pub current_total: f64,
    pub historical_average: f64,
    pub is_high: bool,
}

impl TrendAnalysis {
    /// No earlier months to compare against.
    pub fn insufficient_history(&self) -> bool {
        self.historical_average <= 0.0
    }
}

pub fn analyze(records: &[Expense], selector: PeriodSelector) -> TrendAnalysis {
    analyze_at(records, selector, dates::today())
}

/// Compare the target month's spending with the mean of all earlier months.
/// All history targets the current month.
pub fn analyze_at(records: &[Expense], selector: PeriodSelector, today: NaiveDate) -> TrendAnalysis {
    let target = selector.month_at(today).unwrap_or_else(|| MonthKey::of(today));
    let buckets = monthly_totals(records);

    let current_total = buckets.get(&target).copied().unwrap_or(0.0);
    let earlier: Vec<f64> = buckets.range(..target).map(|(_, v)| *v).collect();
    let historical_average = if earlier.is_empty() {
        0.0
    } else {
        earlier.iter().sum::<f64>() / earlier.len() as f64
    };
    let is_high = historical_average > 0.0 && current_total > historical_average * HIGH_SPENDING_TOLERANCE;

    tracing::debug!(
        month = %target,
        current_total,
        historical_average,
        earlier_months = earlier.len(),
        is_high,
        "trend analysis"
    );

    TrendAnalysis {
        month: target,
        current_total,
        historical_average,
        is_high,
    }
}

/// Sum of valid amounts per month; records without a usable date or amount
/// are left out.
pub fn monthly_totals(records: &[Expense]) -> BTreeMap<MonthKey, f64> {
    let mut buckets = BTreeMap::new();
    for e in records {
        let (Some(month), Some(amount)) = (e.date.month(), e.amount_value()) else {
            continue;
        };
        *buckets.entry(month).or_insert(0.0) += amount;
    }
    buckets
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
}

impl BudgetStatus {
    pub fn is_over(&self) -> bool {
        self.remaining < 0.0
    }
}

pub fn budget_status(budget: f64, spent: f64) -> BudgetStatus {
    BudgetStatus {
        budget,
        spent,
        remaining: budget - spent,
    }
}
