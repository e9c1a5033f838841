//! Input checks applied before anything is written.

use crate::error::CoreError;

/// Matches the `VARCHAR(255)` width of `articles.title`.
pub const MAX_TITLE_LEN: usize = 255;

/// An article title must be non-blank and fit the column.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Article title must not be empty".into()));
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Article title must be at most {MAX_TITLE_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

pub fn validate_comment_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation("Comment text must not be empty".into()));
    }
    Ok(())
}
