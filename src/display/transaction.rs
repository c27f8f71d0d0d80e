//! Transaction display formatting
//!
//! Register view of recorded purchases. Rows are numbered from 1 so the
//! numbers can be passed straight to `bucket txn remove`.

use crate::models::Transaction;

/// Format a single purchase as a register row
pub fn format_transaction_row(index: usize, txn: &Transaction, symbol: &str) -> String {
    let repeats = txn
        .frequency()
        .map(|f| f.to_string())
        .unwrap_or_default();

    format!(
        "{:>4}  {:<11}  {:<24}  {:<16}  {:>12}  {}",
        index,
        txn.date.to_string(),
        truncate(&txn.description, 24),
        truncate(&txn.category, 16),
        txn.amount.format_with_symbol(symbol),
        repeats
    )
    .trim_end()
    .to_string()
}

/// Format purchases as a numbered register
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<11}  {:<24}  {:<16}  {:>12}  {}\n",
        "#", "Date", "Description", "Category", "Amount", "Repeats"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for (i, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(i + 1, txn, symbol));
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
