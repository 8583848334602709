//! Validation utilities.

use crate::types::ChatError;

/// Validation utilities
pub struct Validator;

impl Validator {
    /// Validate chat name. Any non-empty name is accepted as given.
    pub fn chat_name(name: &str) -> Result<(), ChatError> {
        if name.is_empty() {
            return Err(ChatError::validation("chat name cannot be empty"));
        }

        Ok(())
    }

    /// Validate the member list of a new chat. Duplicates are allowed.
    pub fn member_ids(member_ids: &[i64]) -> Result<(), ChatError> {
        if member_ids.is_empty() {
            return Err(ChatError::validation("chat needs at least one member"));
        }

        Ok(())
    }

    /// Validate message text
    pub fn message_text(text: &str) -> Result<(), ChatError> {
        if text.is_empty() {
            return Err(ChatError::validation("message text cannot be empty"));
        }

        Ok(())
    }
}
