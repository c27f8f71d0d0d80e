//! Category CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_category_list;
use crate::error::BudgetResult;
use crate::models::Money;
use crate::services::BudgetSession;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category with a spending limit
    Add {
        /// Category name
        name: String,
        /// Spending limit (e.g., "200" or "200.00")
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// List all categories with their limits
    List,

    /// Delete a category and every purchase recorded under it
    Remove {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    session: &mut BudgetSession,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    match cmd {
        CategoryCommands::Add { name, limit } => {
            let limit = Money::parse(&limit)?;
            session.add_category(&name, limit)?;
            println!(
                "Created category: {} ({})",
                name.trim(),
                limit.format_with_symbol(&settings.currency_symbol)
            );
        }

        CategoryCommands::List => {
            print!(
                "{}",
                format_category_list(session.budget(), &settings.currency_symbol)
            );
        }

        CategoryCommands::Remove { name } => {
            let name = name.trim();
            let purchases = session.budget().transactions_in(name).len();
            if session.remove_category(name)? {
                println!("Deleted category: {} ({} purchases removed)", name, purchases);
            } else {
                println!("No category named '{}'; nothing to delete.", name);
            }
        }
    }

    Ok(())
}
