use crate::error::{AppError, Result};

/// Checks the raw comment text from the editor. The text itself is opaque
/// rich content; only emptiness and length are enforced here. Length is
/// measured in characters, matching the display-name check below.
pub fn validate_comment_text(text: &str, max_length: usize) -> Result<()> {
    if text.trim().is_empty() {
        return Err(AppError::validation("Comment text cannot be empty"));
    }

    if text.chars().count() > max_length {
        return Err(AppError::validation(&format!(
            "Comment text cannot exceed {} characters",
            max_length
        )));
    }

    Ok(())
}

/// Checks the display name an identity provider handed back before it is
/// stamped onto a comment.
pub fn validate_display_name(display_name: &str) -> Result<()> {
    if display_name.trim().is_empty() {
        return Err(AppError::validation("Display name cannot be empty"));
    }

    if display_name.chars().count() > 50 {
        return Err(AppError::validation("Display name cannot exceed 50 characters"));
    }

    Ok(())
}
