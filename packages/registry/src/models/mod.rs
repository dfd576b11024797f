pub mod account;
pub mod animal;
pub mod ownership;
pub mod pet;

use crate::error::RegistryError;

/// Trim `value` and check it holds between 1 and `max` characters.
pub(crate) fn required_text(field: &str, value: &str, max: usize) -> Result<String, RegistryError> {
    let value = value.trim();
    if value.is_empty() || value.chars().count() > max {
        return Err(RegistryError::Validation(format!(
            "{field} must be 1-{max} characters"
        )));
    }
    Ok(value.to_string())
}

/// Check `value` holds at most `max` characters; empty is allowed.
pub(crate) fn optional_text(field: &str, value: &str, max: usize) -> Result<(), RegistryError> {
    if value.chars().count() > max {
        return Err(RegistryError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
