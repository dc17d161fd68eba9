use std::collections::BTreeMap;

use colored::Colorize;

use crate::models::Category;

const BAR_WIDTH: usize = 30;

/// Render each category's share of the total as a horizontal bar, largest
/// first. Returns `None` when there is nothing to draw.
pub fn render_shares(totals: &BTreeMap<Category, f64>) -> Option<String> {
    let total: f64 = totals.values().sum();
    if totals.is_empty() || total <= 0.0 {
        return None;
    }

    let mut rows: Vec<(Category, f64)> = totals.iter().map(|(c, v)| (*c, *v)).collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
    let name_width = rows.iter().map(|(c, _)| c.name().len()).max().unwrap_or(0);

    let mut out = String::new();
    for (category, value) in rows {
        let share = value / total;
        let filled = ((share * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        out.push_str(&format!(
            "{:<name_width$}  {}  {:>5.1}%\n",
            category.name(),
            bar.green(),
            share * 100.0,
        ));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_totals_render_nothing() {
        assert!(render_shares(&BTreeMap::new()).is_none());
        let zero = BTreeMap::from([(Category::Food, 0.0)]);
        assert!(render_shares(&zero).is_none());
    }

    #[test]
    fn test_shares_largest_first() {
        colored::control::set_override(false);
        let totals = BTreeMap::from([(Category::Food, 25.0), (Category::Bills, 75.0)]);
        let out = render_shares(&totals).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Bills"));
        assert!(lines[0].ends_with("75.0%"));
        assert!(lines[1].starts_with("Food "));
        assert!(lines[1].ends_with("25.0%"));
        assert_eq!(lines[0].matches('█').count(), 23);
    }
}
