//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use foldertree_core::error::AppError;
use foldertree_entity::folder::Folder;
use foldertree_service::FolderService;

use crate::output::{self, OutputFormat};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Create a new folder
    Create {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Parent folder ID (omit for root)
        #[arg(short, long)]
        parent_id: Option<i64>,
    },
    /// Rename a folder
    Rename {
        /// Folder ID
        id: i64,
        /// New name
        #[arg(short, long)]
        name: String,
    },
    /// Delete a folder (children and files are left in place)
    Delete {
        /// Folder ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
pub struct FolderRow {
    /// Folder ID
    id: i64,
    /// Name
    name: String,
    /// Parent folder
    parent: String,
    /// Updated at
    updated_at: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id,
            name: f.name.clone(),
            parent: f
                .parent_folder_id
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            updated_at: f.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute folder commands
pub async fn execute(args: &FolderArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let store = super::open_store(&config).await?;
    let service = FolderService::from_manager(&store);

    let result = run(&service, &args.command, format).await;
    store.close().await;
    result
}

async fn run(
    service: &FolderService,
    command: &FolderCommand,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        FolderCommand::Create { name, parent_id } => {
            let folder = service.create_folder(name, *parent_id).await?;
            show(&folder, format);
        }
        FolderCommand::Rename { id, name } => {
            let folder = service.rename_folder(*id, name).await?;
            show(&folder, format);
        }
        FolderCommand::Delete { id, yes } => {
            let prompt = format!("Delete folder {id}? Its children and files stay in storage.");
            if !super::confirm(&prompt, *yes)? {
                println!("Cancelled.");
                return Ok(());
            }
            service.delete_folder(*id).await?;
            output::print_success(&format!("Folder {id} deleted"));
        }
    }

    Ok(())
}

fn show(folder: &Folder, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_json(folder),
        OutputFormat::Table => output::print_list(&[FolderRow::from(folder)], format),
    }
}
