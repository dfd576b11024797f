use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::user;
use crate::error::RegistryError;

use super::{optional_text, required_text};

/// Credential and profile fields shared by every account.
///
/// A [`user::Model`] is an `Account` plus a profile image; see
/// [`user::Model::account`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Account {
    pub username: String,
    /// Argon2 PHC string.
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl Account {
    /// First and last name separated by a space, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Input for [`crate::store::create_user`]. The password is plaintext here
/// and hashed before it is stored.
#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            profile_image: None,
        }
    }
}

/// Letters, digits and `@ . + - _`.
pub fn validate_username(username: &str) -> Result<String, RegistryError> {
    let username = required_text("Username", username, user::USERNAME_MAX_LEN)?;
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(RegistryError::Validation(
            "Username may contain only letters, digits and @/./+/-/_".into(),
        ));
    }
    Ok(username)
}

pub fn validate_profile_image(profile_image: Option<&str>) -> Result<(), RegistryError> {
    match profile_image {
        Some(path) => optional_text("Profile image", path, user::PROFILE_IMAGE_MAX_LEN),
        None => Ok(()),
    }
}

/// Validate a new user and return the trimmed username.
pub fn validate_new_user(payload: &NewUser) -> Result<String, RegistryError> {
    let username = validate_username(&payload.username)?;
    if payload.password.is_empty() {
        return Err(RegistryError::Validation("Password must not be empty".into()));
    }
    optional_text("Email", &payload.email, user::EMAIL_MAX_LEN)?;
    optional_text("First name", &payload.first_name, user::USERNAME_MAX_LEN)?;
    optional_text("Last name", &payload.last_name, user::USERNAME_MAX_LEN)?;
    validate_profile_image(payload.profile_image.as_deref())?;
    Ok(username)
}
