//! Core data models for bucket-budget
//!
//! Value types (dates, money, transactions) and the `Budget` aggregate that
//! owns categories and the purchases recorded against them.

pub mod budget;
pub mod date;
pub mod money;
pub mod transaction;

pub use budget::Budget;
pub use date::Date;
pub use money::Money;
pub use transaction::{Frequency, Transaction, TransactionKind};
