//! CLI command definitions and dispatch.

pub mod config;
pub mod file;
pub mod folder;
pub mod migrate;
pub mod serve;
pub mod tree;

use clap::{Parser, Subcommand};

use foldertree_core::config::{AppConfig, StoreProvider};
use foldertree_core::error::AppError;
use foldertree_database::StoreManager;

use crate::output::{self, OutputFormat};

/// FolderTree: two-level folder and file tree service
#[derive(Debug, Parser)]
#[command(name = "foldertree", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/{env}.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the FolderTree server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Print the folder tree
    Tree,
    /// Folder management
    Folder(folder::FolderArgs),
    /// File management
    File(file::FileArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Commands {
    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Commands::Serve(_) => "info",
            _ => "warn",
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::Tree => tree::execute(&self.env, self.format).await,
            Commands::Folder(args) => folder::execute(args, &self.env, self.format).await,
            Commands::File(args) => file::execute(args, &self.env, self.format).await,
            Commands::Config(args) => config::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for an environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: open the configured store
///
/// Commands that read or mutate data against the in-memory provider only
/// see rows created within the same process, so a warning is printed.
pub async fn open_store(config: &AppConfig) -> Result<StoreManager, AppError> {
    if config.database.provider == StoreProvider::Memory {
        output::print_warning("database.provider is 'memory'; data is not persisted");
    }
    StoreManager::new(&config.database).await
}

/// Helper: ask before a destructive action unless `yes` was passed
pub fn confirm(prompt: &str, yes: bool) -> Result<bool, AppError> {
    if yes {
        return Ok(true);
    }

    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
