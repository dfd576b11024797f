use crate::entity::{animal_type, breed};
use crate::error::RegistryError;

use super::required_text;

pub fn validate_animal_type_name(name: &str) -> Result<String, RegistryError> {
    required_text("Animal type name", name, animal_type::NAME_MAX_LEN)
}

pub fn validate_breed_name(name: &str) -> Result<String, RegistryError> {
    required_text("Breed name", name, breed::NAME_MAX_LEN)
}
