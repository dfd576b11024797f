use crate::entity::pet_ownership;
use crate::error::RegistryError;

use super::required_text;

/// Roles are free-form; this only enforces presence and length.
pub fn validate_role(role: &str) -> Result<String, RegistryError> {
    required_text("Role", role, pet_ownership::ROLE_MAX_LEN)
}
