use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The role recorded when none is given.
pub const DEFAULT_ROLE: &str = "owner";

/// Maximum length of an ownership role.
pub const ROLE_MAX_LEN: usize = 50;

/// Links a pet to one of its owners.
///
/// The composite primary key makes `(pet_id, owner_id)` unique. Rows are
/// removed together with either the pet or the user.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_ownership")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pet_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub owner_id: i32,
    #[sea_orm(belongs_to, from = "pet_id", to = "id", on_delete = "Cascade")]
    pub pet: HasOne<super::pet::Entity>,
    #[sea_orm(belongs_to, from = "owner_id", to = "id", on_delete = "Cascade")]
    pub owner: HasOne<super::user::Entity>,

    /// Free-form, e.g. "owner" or "co-owner".
    #[sea_orm(column_type = "String(StringLen::N(50))", default_value = "owner")]
    pub role: String,

    /// Set once on insert.
    pub registered_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            role: Set(DEFAULT_ROLE.to_owned()),
            registered_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}
