use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Maximum length of a breed name.
pub const NAME_MAX_LEN: usize = 100;

/// A named variant within an animal type, e.g. "Poodle" under "Dog".
///
/// `(animal_type_id, name)` is unique. The composite index is created by
/// [`crate::schema::ensure_indexes`].
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "breed")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub animal_type_id: i32,
    #[sea_orm(belongs_to, from = "animal_type_id", to = "id", on_delete = "Cascade")]
    pub animal_type: HasOne<super::animal_type::Entity>,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,

    #[sea_orm(has_many)]
    pub pets: HasMany<super::pet::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
