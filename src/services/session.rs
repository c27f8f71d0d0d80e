//! Budget session
//!
//! A `BudgetSession` is the one place the front end talks to. It owns the
//! current [`Budget`], remembers which file it came from, tracks unsaved
//! changes and writes every change to the audit log.
//!
//! Inputs arrive already typed (`Money`, `Date`, `Transaction`); parsing of
//! user text happens before a session method is called.

use std::path::{Path, PathBuf};

use serde_json::json;

use super::report::BudgetReport;
use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Money, Transaction};
use crate::storage::BudgetFile;

/// The working budget plus its file and dirty state
#[derive(Debug, Default)]
pub struct BudgetSession {
    budget: Budget,
    file: Option<BudgetFile>,
    changed: bool,
    audit: Option<AuditLogger>,
}

impl BudgetSession {
    /// Start with an empty, unsaved budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an existing budget file
    pub fn open(path: impl Into<PathBuf>) -> BudgetResult<Self> {
        let mut session = Self::new();
        session.load(path)?;
        Ok(session)
    }

    /// Load `path` if it exists, otherwise start empty and save there later
    pub fn open_or_create(path: impl Into<PathBuf>) -> BudgetResult<Self> {
        let file = BudgetFile::new(path);
        if file.exists() {
            return Self::open(file.path());
        }
        Ok(Self {
            file: Some(file),
            ..Self::default()
        })
    }

    /// Record every change in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Path the budget is saved to, if one is set
    pub fn file(&self) -> Option<&Path> {
        self.file.as_ref().map(BudgetFile::path)
    }

    /// Whether there are changes not yet written to disk
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn report(&self) -> BudgetReport {
        BudgetReport::generate(&self.budget)
    }

    pub fn set_total_budget(&mut self, amount: Money) -> BudgetResult<()> {
        let entry = AuditEntry::total_changed(self.budget.total_budget(), amount);
        let previous = self.budget.clone();
        self.budget.set_total_budget(amount);
        self.commit(previous, entry)
    }

    /// Add a category after checking its name can be stored
    pub fn add_category(&mut self, name: &str, limit: Money) -> BudgetResult<()> {
        let name = name.trim();
        validate_text("Category name", name)?;

        let previous = self.budget.clone();
        self.budget.add_category(name, limit)?;
        self.commit(previous, AuditEntry::create(EntityType::Category, name, None, &limit))
    }

    /// Remove a category and its purchases
    ///
    /// Returns `false` (and changes nothing) if there was no such category.
    pub fn remove_category(&mut self, name: &str) -> BudgetResult<bool> {
        let name = name.trim();
        let purchases = self.budget.transactions_in(name).len();
        let previous = self.budget.clone();
        let Some(limit) = self.budget.remove_category(name) else {
            return Ok(false);
        };

        self.commit(
            previous,
            AuditEntry::delete(
                EntityType::Category,
                name,
                None,
                &json!({ "limit": limit, "purchases": purchases }),
            ),
        )?;
        Ok(true)
    }

    /// Record a purchase
    pub fn add_purchase(&mut self, mut transaction: Transaction) -> BudgetResult<()> {
        validate_text("Description", &transaction.description)?;
        transaction.category = transaction.category.trim().to_string();

        let entry = AuditEntry::create(
            EntityType::Transaction,
            transaction.description.clone(),
            Some(transaction.category.clone()),
            &transaction,
        );
        let previous = self.budget.clone();
        self.budget.add_transaction(transaction)?;
        self.commit(previous, entry)
    }

    /// Remove one purchase equal to `transaction`, returning its description
    pub fn delete_purchase(&mut self, transaction: &Transaction) -> BudgetResult<String> {
        let previous = self.budget.clone();
        let description = self
            .budget
            .remove_transaction(transaction)
            .ok_or_else(|| BudgetError::transaction_not_found(&transaction.description))?;

        self.commit(
            previous,
            AuditEntry::delete(
                EntityType::Transaction,
                description.clone(),
                Some(transaction.category.clone()),
                transaction,
            ),
        )?;
        Ok(description)
    }

    /// Remove the purchase at `index` in [`Budget::list_transactions`] order
    pub fn delete_purchase_at(&mut self, index: usize) -> BudgetResult<Transaction> {
        let transaction = self
            .budget
            .list_transactions()
            .into_iter()
            .nth(index)
            .ok_or_else(|| BudgetError::transaction_not_found(format!("#{}", index + 1)))?;

        self.delete_purchase(&transaction)?;
        Ok(transaction)
    }

    /// Drop all categories and purchases, keeping the total budget
    pub fn clear(&mut self) -> BudgetResult<()> {
        let total = self.budget.total_budget();
        self.replace(Budget::with_total(total))
    }

    /// Start over with a fresh budget
    pub fn reset(&mut self, total: Money) -> BudgetResult<()> {
        self.replace(Budget::with_total(total))
    }

    /// Replace the budget with the contents of `path`
    ///
    /// The session now saves to `path`. On failure the current budget is
    /// kept.
    pub fn load(&mut self, path: impl Into<PathBuf>) -> BudgetResult<()> {
        let file = BudgetFile::new(path);
        self.budget = file.load()?;
        self.file = Some(file);
        self.changed = false;
        Ok(())
    }

    /// Write the budget to its file
    pub fn save(&mut self) -> BudgetResult<()> {
        let file = self
            .file
            .as_ref()
            .ok_or_else(|| BudgetError::Config("No budget file selected".into()))?;
        file.save(&self.budget)?;
        self.changed = false;
        Ok(())
    }

    /// Write the budget to `path` and keep saving there
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> BudgetResult<()> {
        self.file = Some(BudgetFile::new(path));
        self.save()
    }

    fn replace(&mut self, budget: Budget) -> BudgetResult<()> {
        let previous = std::mem::replace(&mut self.budget, budget);
        let entry = AuditEntry::delete(
            EntityType::Budget,
            "budget",
            None,
            &json!({
                "total": previous.total_budget(),
                "categories": previous.categories().len(),
                "purchases": previous.transaction_count(),
            }),
        );
        self.commit(previous, entry)
    }

    /// Keep a change that has been applied to the budget
    ///
    /// The entry is audited first. If it cannot be written, the budget goes
    /// back to `previous` and the session stays as it was.
    fn commit(&mut self, previous: Budget, entry: AuditEntry) -> BudgetResult<()> {
        if let Err(err) = self.audit(entry) {
            self.budget = previous;
            return Err(err);
        }
        self.changed = true;
        Ok(())
    }

    fn audit(&self, entry: AuditEntry) -> BudgetResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}

/// Reject text the budget file format cannot hold
fn validate_text(what: &str, value: &str) -> BudgetResult<()> {
    if value.trim().is_empty() {
        return Err(BudgetError::Validation(format!("{} cannot be empty", what)));
    }
    if value.contains([',', '\n', '\r']) {
        return Err(BudgetError::Validation(format!(
            "{} cannot contain commas or line breaks",
            what
        )));
    }
    Ok(())
}
