//! Flat text format for budgets
//!
//! ```text
//! <total_budget_cents>
//! <category_name>,<category_limit_cents>
//! ...
//! -
//! <day>,<month>,<year>,<description>,<amount_cents>,<category_name>[,<frequency>]
//! ...
//! ```
//!
//! Purchases may name categories that were never declared in the header
//! section; those are created with a zero limit. The optional seventh field
//! marks a recurring purchase (`weekly`, `monthly` or `yearly`).
//!
//! There is no escaping. Names and descriptions containing commas or line
//! breaks cannot be written.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Date, Frequency, Money, Transaction};

/// Line that ends the category section
const SECTION_SEPARATOR: &str = "-";

/// Parse a budget from its text form
pub fn parse_budget(input: &str) -> BudgetResult<Budget> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let (line_no, first) = lines
        .next()
        .ok_or_else(|| BudgetError::FileFormat("file is empty".into()))?;
    let mut budget = Budget::with_total(parse_cents(line_no, first, "total budget")?);

    let mut separator_seen = false;
    for (line_no, line) in lines.by_ref() {
        if line.trim() == SECTION_SEPARATOR {
            separator_seen = true;
            break;
        }

        let fields = split_fields(line_no, line, 2, 2)?;
        let limit = parse_cents(line_no, fields[1], "category limit")?;
        budget
            .add_category(fields[0], limit)
            .map_err(|e| BudgetError::file_format_at(line_no, e))?;
    }

    if !separator_seen {
        return Err(BudgetError::FileFormat(format!(
            "missing '{}' line after the category section",
            SECTION_SEPARATOR
        )));
    }

    for (line_no, line) in lines {
        let transaction = parse_purchase(line_no, line)?;
        add_provisioning_category(&mut budget, transaction)
            .map_err(|e| BudgetError::file_format_at(line_no, e))?;
    }

    Ok(budget)
}

/// Render a budget in its text form
///
/// Fails if a category name or description cannot be represented.
pub fn write_budget(budget: &Budget) -> BudgetResult<String> {
    let mut output = String::new();
    output.push_str(&format!("{}\n", budget.total_budget().cents()));

    for (name, limit) in budget.categories() {
        check_field("category name", name)?;
        output.push_str(&format!("{},{}\n", name, limit.cents()));
    }
    output.push_str(SECTION_SEPARATOR);
    output.push('\n');

    for name in budget.categories().keys() {
        for txn in budget.transactions_in(name) {
            check_field("description", &txn.description)?;
            output.push_str(&format!(
                "{},{},{},{},{},{}",
                txn.date.day(),
                txn.date.month(),
                txn.date.year(),
                txn.description,
                txn.amount.cents(),
                txn.category
            ));
            if let Some(frequency) = txn.frequency() {
                output.push(',');
                output.push_str(frequency.as_str());
            }
            output.push('\n');
        }
    }

    Ok(output)
}

/// Add a purchase, creating its category at a zero limit if needed
fn add_provisioning_category(budget: &mut Budget, transaction: Transaction) -> BudgetResult<()> {
    if !budget.has_category(&transaction.category) {
        budget.add_category(transaction.category.clone(), Money::zero())?;
    }
    budget.add_transaction(transaction)
}

fn parse_purchase(line_no: usize, line: &str) -> BudgetResult<Transaction> {
    let fields = split_fields(line_no, line, 6, 7)?;

    let date = Date::parse_parts(fields[0], fields[1], fields[2])
        .map_err(|e| BudgetError::file_format_at(line_no, e))?;
    let amount = parse_cents(line_no, fields[4], "purchase amount")?;
    let description = fields[3];
    let category = fields[5];

    match fields.get(6) {
        None => Ok(Transaction::purchase(date, description, amount, category)),
        Some(raw) => {
            let frequency: Frequency = raw
                .parse()
                .map_err(|e| BudgetError::file_format_at(line_no, e))?;
            Ok(Transaction::recurring(date, description, amount, category, frequency))
        }
    }
}

fn split_fields(line_no: usize, line: &str, min: usize, max: usize) -> BudgetResult<Vec<&str>> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < min || fields.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{} or {}", min, max)
        };
        return Err(BudgetError::file_format_at(
            line_no,
            format!("expected {} comma-separated fields, found {}", expected, fields.len()),
        ));
    }
    Ok(fields)
}

fn parse_cents(line_no: usize, raw: &str, what: &str) -> BudgetResult<Money> {
    raw.trim()
        .parse::<i64>()
        .map(Money::from_cents)
        .map_err(|_| {
            BudgetError::file_format_at(
                line_no,
                format!("{} '{}' is not a whole number of cents", what, raw.trim()),
            )
        })
}

fn check_field(what: &str, value: &str) -> BudgetResult<()> {
    if value.contains([',', '\n', '\r']) {
        return Err(BudgetError::FileFormat(format!(
            "{} '{}' contains a comma or line break and cannot be saved",
            what,
            value.escape_debug()
        )));
    }
    Ok(())
}
