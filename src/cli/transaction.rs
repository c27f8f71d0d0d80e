//! Transaction CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_transaction_register;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Date, Frequency, Money, Transaction};
use crate::services::BudgetSession;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a purchase
    Add {
        /// Category the purchase counts against
        category: String,
        /// Amount (e.g., "12.50", or "-12.50" for a refund)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What was bought
        description: String,
        /// Purchase date (YYYY-MM-DD or D/M/YYYY, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Mark as recurring: weekly, monthly or yearly
        #[arg(short, long)]
        repeats: Option<String>,
    },

    /// List all purchases, cheapest first
    List,

    /// Delete a purchase by its number in 'txn list'
    Remove {
        /// Row number as shown by 'txn list'
        index: usize,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    session: &mut BudgetSession,
    settings: &Settings,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    match cmd {
        TransactionCommands::Add {
            category,
            amount,
            description,
            date,
            repeats,
        } => {
            let amount = Money::parse(&amount)?;
            let category = category.trim().to_string();
            let date = match date {
                Some(raw) => raw.parse::<Date>()?,
                None => Date::today(),
            };
            let transaction = match repeats {
                Some(raw) => {
                    let frequency: Frequency = raw.parse()?;
                    Transaction::recurring(date, description, amount, category, frequency)
                }
                None => Transaction::purchase(date, description, amount, category),
            };

            let shown = transaction.to_string();
            session.add_purchase(transaction)?;
            println!("Recorded: {}", shown);
        }

        TransactionCommands::List => {
            let transactions = session.budget().list_transactions();
            print!(
                "{}",
                format_transaction_register(&transactions, &settings.currency_symbol)
            );
        }

        TransactionCommands::Remove { index } => {
            if index == 0 {
                return Err(BudgetError::Validation(
                    "Transaction numbers start at 1".into(),
                ));
            }
            let removed = session.delete_purchase_at(index - 1)?;
            println!("Deleted: {}", removed);
        }
    }

    Ok(())
}
