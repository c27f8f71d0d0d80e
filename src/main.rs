use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use bucket_budget::audit::AuditLogger;
use bucket_budget::cli::{
    handle_budget_command, handle_category_command, handle_summary_command,
    handle_transaction_command, BudgetCommands, CategoryCommands, TransactionCommands,
};
use bucket_budget::config::{paths::BudgetPaths, settings::Settings};
use bucket_budget::services::BudgetSession;

#[derive(Parser)]
#[command(
    name = "bucket",
    author = "Kaylee Beyene",
    version,
    about = "Track spending against a budget split into categories",
    long_about = "bucket keeps a total budget, a spending limit per category and \
                  the purchases made against each category, stored in a plain \
                  text file you can read and edit by hand."
)]
struct Cli {
    /// Budget file to use (overrides the configured one)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show limits, spending and what is left per category
    #[command(alias = "status")]
    Summary,

    /// Budget-wide commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Purchase commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let budget_file = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.resolve_budget_file(&paths));

    match cli.command {
        Some(Commands::History { limit }) => {
            let entries = AuditLogger::new(paths.audit_log()).read_recent(limit)?;
            if entries.is_empty() {
                println!("No changes recorded yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("bucket Configuration");
            println!("====================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Budget file:    {}", budget_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            return Ok(());
        }
        _ => {}
    }

    let mut session = BudgetSession::open_or_create(&budget_file)?;
    if settings.audit_enabled {
        session = session.with_audit(AuditLogger::new(paths.audit_log()));
    }

    match cli.command {
        Some(Commands::Summary) => handle_summary_command(&session, &settings)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut session, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut session, &settings, cmd)?,
        Some(Commands::Txn(cmd)) => handle_transaction_command(&mut session, &settings, cmd)?,
        Some(Commands::History { .. }) | Some(Commands::Config) => {}
        None => {
            handle_summary_command(&session, &settings)?;
            println!();
            println!("Run 'bucket --help' for usage information.");
        }
    }

    if session.is_changed() {
        session.save()?;
    }

    Ok(())
}
