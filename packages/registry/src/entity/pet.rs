use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Maximum length of a pet name.
pub const NAME_MAX_LEN: usize = 100;

/// An individual animal.
///
/// The primary key is a random UUID assigned when the active model is
/// constructed, so record order is not exposed and ids can be minted
/// client-side. The animal type is not stored; see
/// [`crate::store::animal_type_of`].
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    pub birth_date: Option<Date>,

    #[sea_orm(indexed)]
    pub breed_id: i32,
    /// Breeds with pets cannot be deleted. NO ACTION rejects the delete at
    /// the end of the statement, which also covers a cascade from `animal_type`.
    #[sea_orm(belongs_to, from = "breed_id", to = "id", on_delete = "NoAction")]
    pub breed: HasOne<super::breed::Entity>,

    #[sea_orm(has_many, via = "pet_ownership")]
    pub owners: HasMany<super::user::Entity>,
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            ..ActiveModelTrait::default()
        }
    }
}
