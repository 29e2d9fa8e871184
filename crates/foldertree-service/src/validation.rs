//! Input checks shared by the mutation handlers.

use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;

/// Longest accepted folder or file name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Trim `name` and reject it when blank or too long.
///
/// `what` names the entity in the error message (`"Folder"`, `"File"`).
pub fn normalize_name(what: &str, name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{what} name cannot be empty")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "{what} name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}
