//! Print the assembled folder tree.

use foldertree_core::error::AppError;
use foldertree_service::TreeService;

use crate::output::{self, OutputFormat};

/// Execute the tree command
pub async fn execute(env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let store = super::open_store(&config).await?;

    let tree = TreeService::from_manager(&store).fetch_tree().await;
    store.close().await;
    let tree = tree?;

    match format {
        OutputFormat::Json => output::print_json(&tree),
        OutputFormat::Table if tree.is_empty() => println!("No folders."),
        OutputFormat::Table => {
            print!("{}", output::render_tree(&tree));
            println!("{}", output::tree_summary(&tree));
        }
    }

    Ok(())
}
