//! Audit logging for bucket-budget
//!
//! Every change a [`BudgetSession`](crate::services::BudgetSession) makes is
//! appended to a line-delimited JSON log with the affected entity and, where
//! it applies, its state before and after.
//!
//! # Example
//!
//! ```rust,ignore
//! use bucket_budget::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Category, "Groceries", None, &limit))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
