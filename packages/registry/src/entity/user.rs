use std::fmt;

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::account::Account;

/// Maximum length of a username and of each name part.
pub const USERNAME_MAX_LEN: usize = 150;

/// Maximum length of an email address.
pub const EMAIL_MAX_LEN: usize = 254;

/// Maximum length of a profile image URL or path.
pub const PROFILE_IMAGE_MAX_LEN: usize = 500;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique, column_type = "String(StringLen::N(150))")]
    pub username: String,
    /// Argon2 PHC string.
    #[serde(skip_serializing)]
    pub password: String,
    #[sea_orm(column_type = "String(StringLen::N(254))")]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(150))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(150))")]
    pub last_name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: DateTimeUtc,
    pub last_login: Option<DateTimeUtc>,

    /// URL or path of the profile picture.
    #[sea_orm(column_type = "String(StringLen::N(500))", nullable)]
    pub profile_image: Option<String>,

    #[sea_orm(has_many, via = "pet_ownership")]
    pub pets: HasMany<super::pet::Entity>,
}

impl Model {
    /// The base account part of this user.
    pub fn account(&self) -> Account {
        Account {
            username: self.username.clone(),
            password: self.password.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            is_active: self.is_active,
            is_staff: self.is_staff,
            is_superuser: self.is_superuser,
            date_joined: self.date_joined,
            last_login: self.last_login,
        }
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            email: Set(String::new()),
            first_name: Set(String::new()),
            last_name: Set(String::new()),
            is_active: Set(true),
            is_staff: Set(false),
            is_superuser: Set(false),
            date_joined: Set(Utc::now()),
            last_login: Set(None),
            profile_image: Set(None),
            ..ActiveModelTrait::default()
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
