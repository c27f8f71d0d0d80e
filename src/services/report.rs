//! Budget report
//!
//! Per-category limit, spending and remaining amounts plus budget-wide
//! totals, computed from a [`Budget`] snapshot.

use crate::models::{Budget, Money};

/// A row in the budget report for a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReportRow {
    pub name: String,
    pub limit: Money,
    pub spent: Money,
    /// Limit minus spent
    pub remaining: Money,
}

impl CategoryReportRow {
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Budget overview: one row per category, sorted by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetReport {
    pub rows: Vec<CategoryReportRow>,
    pub total_budget: Money,
    /// Sum of all category limits
    pub total_allocated: Money,
    pub total_spent: Money,
    /// Total budget minus total spent
    pub total_remaining: Money,
}

impl BudgetReport {
    pub fn generate(budget: &Budget) -> Self {
        let spent = budget.spent_by_category();

        let rows: Vec<CategoryReportRow> = budget
            .categories()
            .iter()
            .map(|(name, limit)| {
                let spent = spent.get(name).copied().unwrap_or_default();
                CategoryReportRow {
                    name: name.clone(),
                    limit: *limit,
                    spent,
                    remaining: *limit - spent,
                }
            })
            .collect();

        let total_spent: Money = rows.iter().map(|r| r.spent).sum();

        Self {
            total_budget: budget.total_budget(),
            total_allocated: rows.iter().map(|r| r.limit).sum(),
            total_spent,
            total_remaining: budget.total_budget().saturating_sub(total_spent),
            rows,
        }
    }

    /// Categories whose spending exceeds their limit
    pub fn overspent(&self) -> impl Iterator<Item = &CategoryReportRow> {
        self.rows.iter().filter(|r| r.is_overspent())
    }

    /// Total budget not yet handed out to categories. May be negative.
    pub fn unallocated(&self) -> Money {
        self.total_budget.saturating_sub(self.total_allocated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Date, Transaction};

    fn budget() -> Budget {
        let mut budget = Budget::with_total(Money::from_cents(50000));
        budget.add_category("Groceries", Money::from_cents(20000)).unwrap();
        budget.add_category("Entertainment", Money::from_cents(1000)).unwrap();
        budget.add_category("Savings", Money::from_cents(5000)).unwrap();
        for (desc, cents, cat) in [("Pizza", 5000, "Groceries"), ("Concert", 2500, "Entertainment")] {
            budget
                .add_transaction(Transaction::purchase(
                    Date::new(5, 1, 2020).unwrap(),
                    desc,
                    Money::from_cents(cents),
                    cat,
                ))
                .unwrap();
        }
        budget
    }

    #[test]
    fn test_rows_sorted_by_name() {
        let report = BudgetReport::generate(&budget());
        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Entertainment", "Groceries", "Savings"]);
    }

    #[test]
    fn test_row_figures() {
        let report = BudgetReport::generate(&budget());
        let groceries = &report.rows[1];
        assert_eq!(groceries.limit.cents(), 20000);
        assert_eq!(groceries.spent.cents(), 5000);
        assert_eq!(groceries.remaining.cents(), 15000);
        assert_eq!(report.rows[2].spent, Money::zero());
    }

    #[test]
    fn test_totals() {
        let report = BudgetReport::generate(&budget());
        assert_eq!(report.total_budget.cents(), 50000);
        assert_eq!(report.total_allocated.cents(), 26000);
        assert_eq!(report.total_spent.cents(), 7500);
        assert_eq!(report.total_remaining.cents(), 42500);
        assert_eq!(report.unallocated().cents(), 24000);
    }

    #[test]
    fn test_overspent() {
        let report = BudgetReport::generate(&budget());
        let over: Vec<&str> = report.overspent().map(|r| r.name.as_str()).collect();
        assert_eq!(over, vec!["Entertainment"]);
    }

    #[test]
    fn test_empty_budget() {
        let report = BudgetReport::generate(&Budget::new());
        assert!(report.rows.is_empty());
        assert_eq!(report.total_spent, Money::zero());
    }

    #[test]
    fn test_extreme_figures_do_not_overflow() {
        use crate::models::budget::MAX_COMBINED_CENTS;

        let max = MAX_COMBINED_CENTS as i64;
        let mut budget = Budget::with_total(Money::from_cents(i64::MIN));
        budget.add_category("Big", Money::from_cents(max)).unwrap();
        budget
            .add_transaction(Transaction::purchase(
                Date::new(5, 1, 2020).unwrap(),
                "Refund",
                Money::from_cents(-max),
                "Big",
            ))
            .unwrap();

        let report = BudgetReport::generate(&budget);
        assert_eq!(report.rows[0].remaining.cents(), 2 * max);
        assert_eq!(report.total_remaining.cents(), i64::MIN + max);
        assert_eq!(report.unallocated().cents(), i64::MIN);
    }
}
