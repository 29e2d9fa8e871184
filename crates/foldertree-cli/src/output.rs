//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use foldertree_entity::folder::FolderNode;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(items),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("Failed to serialize output: {e}")),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}

/// Render the folder tree as indented text, one line per folder or file.
pub fn render_tree(tree: &[FolderNode]) -> String {
    let mut out = String::new();

    for node in tree {
        out.push_str(&format!("[{}] {}/\n", node.folder.id, node.folder.name));

        let entries = node.children.len() + node.files.len();
        let mut index = 0;

        for child in &node.children {
            index += 1;
            let (prefix, rail) = branch(index == entries);
            out.push_str(&format!(
                "{prefix}[{}] {}/\n",
                child.folder.id, child.folder.name
            ));
            for (i, file) in child.files.iter().enumerate() {
                let (leaf, _) = branch(i + 1 == child.files.len());
                out.push_str(&format!("{rail}{leaf}[{}] {}\n", file.id, file.name));
            }
        }

        for file in &node.files {
            index += 1;
            let (leaf, _) = branch(index == entries);
            out.push_str(&format!("{leaf}[{}] {}\n", file.id, file.name));
        }
    }

    out
}

/// One-line totals for a rendered tree.
pub fn tree_summary(tree: &[FolderNode]) -> String {
    let folders: usize = tree.iter().map(FolderNode::folder_count).sum();
    let files: usize = tree.iter().map(FolderNode::file_count).sum();
    format!("{} root(s), {folders} folder(s), {files} file(s)", tree.len())
}

fn branch(last: bool) -> (&'static str, &'static str) {
    if last {
        ("└── ", "    ")
    } else {
        ("├── ", "│   ")
    }
}
