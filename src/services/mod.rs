//! Business logic layer
//!
//! The session that front ends drive, and the report built from it.

pub mod report;
pub mod session;

pub use report::{BudgetReport, CategoryReportRow};
pub use session::BudgetSession;
