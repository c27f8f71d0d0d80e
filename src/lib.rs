//! bucket-budget - category budgeting from the terminal
//!
//! This library keeps a total budget, a spending limit per category and the
//! purchases recorded against each category, and reads and writes them in a
//! line-oriented text format.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (dates, money, transactions, the budget)
//! - `storage`: Budget file format and atomic file writes
//! - `services`: Session and reporting layer
//! - `audit`: Audit logging system
//! - `cli`: Command handlers for the `bucket` binary
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use bucket_budget::models::Money;
//! use bucket_budget::services::BudgetSession;
//!
//! let mut session = BudgetSession::open_or_create("budget.txt")?;
//! session.add_category("Food", Money::parse("200")?)?;
//! session.save()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
