//! File management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use foldertree_core::error::AppError;
use foldertree_entity::file::File;
use foldertree_service::FileService;

use crate::output::{self, OutputFormat};

/// Arguments for file commands
#[derive(Debug, Args)]
pub struct FileArgs {
    /// File subcommand
    #[command(subcommand)]
    pub command: FileCommand,
}

/// File subcommands
#[derive(Debug, Subcommand)]
pub enum FileCommand {
    /// Create a file record in a folder
    Create {
        /// File name
        #[arg(short, long)]
        name: String,
        /// Containing folder ID
        #[arg(short, long)]
        folder_id: i64,
    },
    /// Rename a file
    Rename {
        /// File ID
        id: i64,
        /// New name
        #[arg(short, long)]
        name: String,
    },
    /// Delete a file
    Delete {
        /// File ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
pub struct FileRow {
    /// File ID
    id: i64,
    /// Name
    name: String,
    /// Folder
    folder: i64,
    /// Updated at
    updated_at: String,
}

impl From<&File> for FileRow {
    fn from(f: &File) -> Self {
        Self {
            id: f.id,
            name: f.name.clone(),
            folder: f.folder_id,
            updated_at: f.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute file commands
pub async fn execute(args: &FileArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let store = super::open_store(&config).await?;
    let service = FileService::from_manager(&store);

    let result = run(&service, &args.command, format).await;
    store.close().await;
    result
}

async fn run(
    service: &FileService,
    command: &FileCommand,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        FileCommand::Create { name, folder_id } => {
            let file = service.create_file(name, *folder_id).await?;
            show(&file, format);
        }
        FileCommand::Rename { id, name } => {
            let file = service.rename_file(*id, name).await?;
            show(&file, format);
        }
        FileCommand::Delete { id, yes } => {
            if !super::confirm(&format!("Delete file {id}?"), *yes)? {
                println!("Cancelled.");
                return Ok(());
            }
            service.delete_file(*id).await?;
            output::print_success(&format!("File {id} deleted"));
        }
    }

    Ok(())
}

fn show(file: &File, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_json(file),
        OutputFormat::Table => output::print_list(&[FileRow::from(file)], format),
    }
}
