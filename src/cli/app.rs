//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use flexi_logger::{Logger, LoggerHandle};

use super::contact;
use super::output::{Output, OutputFormat};
use crate::service::Directory;
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(author, version, about = "Flat-file contact directory")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Contact file to use (overrides the config file)
    #[arg(long, global = true, env = "CONTACTS_FILE")]
    pub file: Option<PathBuf>,

    /// Config file to load instead of the global one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a contact
    ///
    /// Examples:
    ///   contacts add "Ana" 3001234567 ana@x.com
    ///   contacts add "Luis" 5550101
    Add {
        /// Contact name
        name: String,

        /// Phone number (digits only)
        phone: String,

        /// Email address
        email: Option<String>,
    },

    /// List all contacts
    List,

    /// Show one contact
    Show {
        /// Phone number of the contact
        phone: String,
    },

    /// Change some fields of a contact (omitted fields are kept)
    Update {
        /// Current phone number of the contact
        #[arg(value_name = "PHONE")]
        original: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long = "phone", value_name = "NEW_PHONE")]
        new_phone: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a contact
    Delete {
        /// Phone number of the contact
        phone: String,
    },

    /// Print the path of the contact file in use
    Path,
}

/// Starts the stderr logger; failure to start only loses diagnostics
fn init_logging(verbose: bool) -> Option<LoggerHandle> {
    let level = if verbose { "debug" } else { "warn" };
    Logger::try_with_str(level)
        .and_then(|logger| logger.start())
        .ok()
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(file) = cli.file {
        config.file = file;
    }

    let format = cli.format.unwrap_or_else(|| config.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose_ctx("config", &format!("Using contact file: {}", config.file.display()));
    let directory = Directory::open(&config);

    match cli.command {
        Commands::Add { name, phone, email } => {
            contact::add(&output, &directory, &name, &phone, email.as_deref().unwrap_or_default())?
        }
        Commands::List => contact::list(&output, &directory)?,
        Commands::Show { phone } => contact::show(&output, &directory, &phone)?,
        Commands::Update {
            original,
            name,
            new_phone,
            email,
        } => contact::update(
            &output,
            &directory,
            &original,
            name.as_deref(),
            new_phone.as_deref(),
            email.as_deref(),
        )?,
        Commands::Delete { phone } => contact::delete(&output, &directory, &phone)?,
        Commands::Path => {
            let path = directory.store().path();
            if output.is_json() {
                output.data(&serde_json::json!({ "path": path.display().to_string() }));
            } else {
                println!("{}", path.display());
            }
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
