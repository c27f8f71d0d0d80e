//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget session.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::{handle_budget_command, handle_summary_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
