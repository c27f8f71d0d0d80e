//! Budget CLI commands
//!
//! Commands acting on the budget as a whole: its total, starting over, and
//! the summary report.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_report;
use crate::error::BudgetResult;
use crate::models::Money;
use crate::services::BudgetSession;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the overall budget amount
    #[command(name = "set-total")]
    SetTotal {
        /// Amount (e.g., "500" or "500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Start a new, empty budget
    New {
        /// Initial total budget
        #[arg(short, long)]
        total: Option<String>,
    },

    /// Remove all categories and purchases, keeping the total
    Clear,
}

/// Print the budget report
pub fn handle_summary_command(session: &BudgetSession, settings: &Settings) -> BudgetResult<()> {
    print!(
        "{}",
        format_budget_report(&session.report(), &settings.currency_symbol)
    );
    Ok(())
}

/// Handle a budget command
pub fn handle_budget_command(
    session: &mut BudgetSession,
    settings: &Settings,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    match cmd {
        BudgetCommands::SetTotal { amount } => {
            let amount = Money::parse(&amount)?;
            session.set_total_budget(amount)?;
            println!(
                "Total budget set to {}",
                amount.format_with_symbol(&settings.currency_symbol)
            );
        }

        BudgetCommands::New { total } => {
            let total = match total {
                Some(raw) => Money::parse(&raw)?,
                None => Money::zero(),
            };
            session.reset(total)?;
            println!(
                "Started a new budget with a total of {}",
                total.format_with_symbol(&settings.currency_symbol)
            );
        }

        BudgetCommands::Clear => {
            session.clear()?;
            println!("Removed all categories and purchases.");
        }
    }

    Ok(())
}
