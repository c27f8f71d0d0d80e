//! Category display formatting
//!
//! Formats the budget report and category list for terminal output.

use crate::models::Budget;
use crate::services::BudgetReport;

/// Format the budget report as a table with a totals footer
pub fn format_budget_report(report: &BudgetReport, symbol: &str) -> String {
    let mut output = String::new();

    if report.rows.is_empty() {
        output.push_str("No categories yet.\n\nRun 'bucket category add <NAME> <LIMIT>' to create one.\n");
    } else {
        let name_width = name_width(report.rows.iter().map(|r| r.name.as_str()));

        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>12}\n",
            "Category",
            "Limit",
            "Spent",
            "Remaining",
            width = name_width
        ));
        output.push_str(&format!(
            "{:-<width$}  {:->12}  {:->12}  {:->12}\n",
            "",
            "",
            "",
            "",
            width = name_width
        ));

        for row in &report.rows {
            let flag = if row.is_overspent() { "  over" } else { "" };
            output.push_str(&format!(
                "{:<width$}  {:>12}  {:>12}  {:>12}{}\n",
                row.name,
                row.limit.format_with_symbol(symbol),
                row.spent.format_with_symbol(symbol),
                row.remaining.format_with_symbol(symbol),
                flag,
                width = name_width
            ));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "Total budget:    {}\n",
        report.total_budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Allocated:       {}\n",
        report.total_allocated.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Spent:           {}\n",
        report.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining:       {}\n",
        report.total_remaining.format_with_symbol(symbol)
    ));

    output
}

/// Format category names with their limits
pub fn format_category_list(budget: &Budget, symbol: &str) -> String {
    if budget.categories().is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = name_width(budget.categories().keys().map(String::as_str));

    let mut output = String::new();
    for (name, limit) in budget.categories() {
        output.push_str(&format!(
            "{:<width$}  {:>12}\n",
            name,
            limit.format_with_symbol(symbol),
            width = name_width
        ));
    }
    output
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(8).max(8)
}
