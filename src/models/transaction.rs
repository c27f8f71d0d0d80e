//! Transaction model
//!
//! A transaction is one spend event recorded against a budget category.
//! Plain purchases and recurring purchases share every field; recurring ones
//! additionally carry a [`Frequency`] tag. Nothing in the crate expands a
//! recurring purchase into repeated occurrences.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::date::Date;
use super::money::Money;
use crate::error::BudgetError;

/// How often a recurring purchase repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Lowercase name used in budget files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(BudgetError::Validation(format!(
                "Unknown frequency '{}' (expected weekly, monthly or yearly)",
                other
            ))),
        }
    }
}

/// Variant tag of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TransactionKind {
    /// A one-off purchase
    Purchase,
    /// A purchase that repeats at the given frequency
    Recurring { frequency: Frequency },
}

/// A single purchase recorded against a category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Transaction {
    /// When the purchase happened
    pub date: Date,

    /// Free-text description
    pub description: String,

    /// Amount spent
    pub amount: Money,

    /// Name of the budget category this purchase counts against
    pub category: String,

    /// Purchase or recurring purchase
    #[serde(flatten)]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a one-off purchase
    pub fn purchase(
        date: Date,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: category.into(),
            kind: TransactionKind::Purchase,
        }
    }

    /// Create a recurring purchase
    pub fn recurring(
        date: Date,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        frequency: Frequency,
    ) -> Self {
        Self {
            kind: TransactionKind::Recurring { frequency },
            ..Self::purchase(date, description, amount, category)
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self.kind, TransactionKind::Recurring { .. })
    }

    /// The repeat frequency, for recurring purchases
    pub fn frequency(&self) -> Option<Frequency> {
        match self.kind {
            TransactionKind::Purchase => None,
            TransactionKind::Recurring { frequency } => Some(frequency),
        }
    }

    /// Display ordering: amount ascending, then description ascending
    ///
    /// This deliberately is not `Ord`: two unequal transactions may compare
    /// equal here.
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| self.description.cmp(&other.description))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.description, self.amount)?;
        if let Some(frequency) = self.frequency() {
            write!(f, " ({})", frequency)?;
        }
        Ok(())
    }
}
