use anyhow::Result;
use clap::{Parser, Subcommand};

use fatora::cli::{
    handle_catalog_command, handle_history_command, handle_invoice_command,
    handle_suggest_command, HistoryArgs, InvoiceCommands,
};
use fatora::config::{paths::FatoraPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "fatora",
    version,
    about = "Invoicing toolkit for small parts shops",
    long_about = "Fatora builds and previews invoices for a small parts shop. \
                  It suggests item names as you type them, assembles line items \
                  into validated invoices, and filters past invoices for review."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest item names for a partially typed query
    Suggest {
        /// The text typed so far
        query: String,
    },

    /// List the item catalog
    Catalog {
        /// Only show names containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Invoice building commands
    #[command(subcommand, alias = "inv")]
    Invoice(InvoiceCommands),

    /// Filter and sort past invoices from a JSON file
    History(HistoryArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FatoraPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Suggest { query }) => {
            handle_suggest_command(&settings, &query)?;
        }
        Some(Commands::Catalog { search }) => {
            handle_catalog_command(&settings, search.as_deref())?;
        }
        Some(Commands::Invoice(cmd)) => {
            handle_invoice_command(&settings, cmd)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&settings, args)?;
        }
        Some(Commands::Config) => {
            println!("Fatora Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency label: {}", settings.currency_label);
            println!("  Custom items:   {}", settings.custom_items.len());
        }
        None => {
            println!("Fatora - invoicing for small parts shops");
            println!();
            println!("Run 'fatora --help' for usage information.");
            println!("Run 'fatora suggest <text>' to look up item names.");
        }
    }

    Ok(())
}
