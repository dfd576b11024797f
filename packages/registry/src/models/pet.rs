use chrono::NaiveDate;
use serde::Deserialize;

use crate::entity::pet;
use crate::error::RegistryError;

use super::required_text;

/// Input for [`crate::store::create_pet`].
#[derive(Clone, Debug, Deserialize)]
pub struct NewPet {
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    pub breed_id: i32,
}

impl NewPet {
    pub fn new(name: impl Into<String>, breed_id: i32) -> Self {
        Self {
            name: name.into(),
            birth_date: None,
            breed_id,
        }
    }

    pub fn born_on(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }
}

pub fn validate_pet_name(name: &str) -> Result<String, RegistryError> {
    required_text("Pet name", name, pet::NAME_MAX_LEN)
}
