//! The budget aggregate
//!
//! A `Budget` owns an overall total, a set of named categories each with a
//! spending limit, and the purchases recorded under each category. Spending
//! figures are recomputed from the recorded purchases on every call; nothing
//! is cached.
//!
//! The total budget is independent of the category limits. Nothing requires
//! the limits to add up to the total.
//!
//! The magnitudes of all category limits, and separately of all purchase
//! amounts, add up to at most [`MAX_COMBINED_CENTS`]. Every sum and
//! difference the budget reports therefore fits in an `i64`.

use std::collections::BTreeMap;

use serde::Serialize;

use super::money::Money;
use super::transaction::Transaction;
use crate::error::{BudgetError, BudgetResult};

/// Upper bound on the summed magnitude of all limits, and of all purchases
pub const MAX_COMBINED_CENTS: u64 = i64::MAX as u64 / 2;

/// Category limits and the purchases recorded against them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Budget {
    total_budget: Money,
    categories: BTreeMap<String, Money>,
    transactions: BTreeMap<String, Vec<Transaction>>,
}

impl Budget {
    /// Create an empty budget with a zero total
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty budget with an initial total
    pub fn with_total(total_budget: Money) -> Self {
        Self {
            total_budget,
            ..Self::default()
        }
    }

    pub fn total_budget(&self) -> Money {
        self.total_budget
    }

    /// Replace the overall budget figure. Negative totals are accepted.
    pub fn set_total_budget(&mut self, amount: Money) {
        self.total_budget = amount;
    }

    /// Add a category with its spending limit
    pub fn add_category(&mut self, name: impl Into<String>, limit: Money) -> BudgetResult<()> {
        let name = name.into();
        if self.categories.contains_key(&name) {
            return Err(BudgetError::DuplicateCategory(name));
        }
        if !fits_combined(self.categories.values().copied(), limit) {
            return Err(BudgetError::InvalidAmount(format!(
                "limit {} for {} takes the combined category limits out of range",
                limit, name
            )));
        }
        self.categories.insert(name, limit);
        Ok(())
    }

    /// Category names mapped to their limits
    pub fn categories(&self) -> &BTreeMap<String, Money> {
        &self.categories
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// The spending limit of one category
    pub fn category_limit(&self, name: &str) -> Option<Money> {
        self.categories.get(name).copied()
    }

    /// Amount spent in every category, zero for categories with no purchases
    pub fn spent_by_category(&self) -> BTreeMap<String, Money> {
        self.categories
            .keys()
            .map(|name| (name.clone(), self.spent_in(name)))
            .collect()
    }

    /// Amount spent in one category
    pub fn spent_in(&self, name: &str) -> Money {
        self.transactions
            .get(name)
            .map(|txns| txns.iter().map(|t| t.amount).sum())
            .unwrap_or_default()
    }

    /// Sum of spending across all categories
    pub fn total_spent(&self) -> Money {
        self.spent_by_category().values().sum()
    }

    /// Limit minus spending for every category. May be negative.
    pub fn remaining_by_category(&self) -> BTreeMap<String, Money> {
        self.categories
            .iter()
            .map(|(name, limit)| (name.clone(), *limit - self.spent_in(name)))
            .collect()
    }

    /// Total budget minus total spending, clamped to the representable range
    pub fn total_remaining(&self) -> Money {
        self.total_budget.saturating_sub(self.total_spent())
    }

    /// Record a purchase under its category
    ///
    /// Fails with [`BudgetError::UnknownCategory`] and leaves the budget
    /// untouched if the category does not exist, or with
    /// [`BudgetError::InvalidAmount`] if the amount would take combined
    /// spending out of range.
    pub fn add_transaction(&mut self, transaction: Transaction) -> BudgetResult<()> {
        if !self.categories.contains_key(&transaction.category) {
            return Err(BudgetError::UnknownCategory(transaction.category));
        }
        let amounts = self.transactions.values().flatten().map(|t| t.amount);
        if !fits_combined(amounts, transaction.amount) {
            return Err(BudgetError::InvalidAmount(format!(
                "{} for {} takes combined spending out of range",
                transaction.amount, transaction.description
            )));
        }
        self.transactions
            .entry(transaction.category.clone())
            .or_default()
            .push(transaction);
        Ok(())
    }

    /// Remove the first purchase equal to `transaction`
    ///
    /// Returns the removed purchase's description, or `None` when no such
    /// purchase (or no such category) exists.
    pub fn remove_transaction(&mut self, transaction: &Transaction) -> Option<String> {
        let txns = self.transactions.get_mut(&transaction.category)?;
        let index = txns.iter().position(|t| t == transaction)?;
        let removed = txns.remove(index);
        if txns.is_empty() {
            self.transactions.remove(&transaction.category);
        }
        Some(removed.description)
    }

    /// Delete a category and every purchase recorded under it
    ///
    /// Removing a category that does not exist is a no-op. Returns the
    /// removed limit, if there was one.
    pub fn remove_category(&mut self, name: &str) -> Option<Money> {
        self.transactions.remove(name);
        self.categories.remove(name)
    }

    /// Every purchase, ordered by amount then description
    pub fn list_transactions(&self) -> Vec<Transaction> {
        let mut all: Vec<Transaction> = self.transactions.values().flatten().cloned().collect();
        all.sort_by(Transaction::display_cmp);
        all
    }

    /// Purchases recorded under one category, in insertion order
    pub fn transactions_in(&self, name: &str) -> &[Transaction] {
        self.transactions
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of recorded purchases
    pub fn transaction_count(&self) -> usize {
        self.transactions.values().map(Vec::len).sum()
    }
}

/// Whether `existing` plus `extra` stays within [`MAX_COMBINED_CENTS`]
fn fits_combined(existing: impl Iterator<Item = Money>, extra: Money) -> bool {
    existing
        .chain(std::iter::once(extra))
        .try_fold(0u64, |acc, m| acc.checked_add(m.magnitude()))
        .is_some_and(|total| total <= MAX_COMBINED_CENTS)
}
