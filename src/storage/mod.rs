//! Storage layer for bucket-budget
//!
//! Budgets live in a single flat text file (see [`codec`]). Writes go
//! through a temp file and rename so a failed save never truncates the
//! previous copy.

pub mod codec;
pub mod file_io;

pub use codec::{parse_budget, write_budget};
pub use file_io::{read_json, read_text, write_atomic, write_json_atomic};

use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;

/// A budget file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetFile {
    path: PathBuf,
}

impl BudgetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the budget
    ///
    /// An unreadable file is reported as a format error, same as a
    /// malformed one.
    pub fn load(&self) -> BudgetResult<Budget> {
        let contents = read_text(&self.path).map_err(|e| match e {
            BudgetError::Storage(msg) => BudgetError::FileFormat(msg),
            other => other,
        })?;
        parse_budget(&contents)
    }

    /// Serialize and atomically write the budget
    pub fn save(&self, budget: &Budget) -> BudgetResult<()> {
        let contents = write_budget(budget)?;
        write_atomic(&self.path, contents.as_bytes())
    }
}
