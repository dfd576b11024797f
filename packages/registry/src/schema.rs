use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DbErr};
use tracing::info;

use crate::entity::{breed, pet_ownership};

/// Name of the unique index over `breed (animal_type_id, name)`.
pub const UNIQUE_BREED_PER_ANIMAL_TYPE: &str = "unique_breed_per_animal_type";

/// Name of the index over `pet_ownership (owner_id)`, used when listing a user's pets.
pub const PET_OWNERSHIP_OWNER_INDEX: &str = "idx_pet_ownership_owner";

/// Ensure indexes that schema sync does not derive from the entities.
///
/// Schema sync only knows single-column uniqueness, so the per-type breed
/// name constraint is created here.
pub async fn ensure_indexes<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();

    let stmt = Index::create()
        .if_not_exists()
        .unique()
        .name(UNIQUE_BREED_PER_ANIMAL_TYPE)
        .table(breed::Entity)
        .col(breed::Column::AnimalTypeId)
        .col(breed::Column::Name)
        .to_owned();
    db.execute_raw(backend.build(&stmt)).await?;
    info!("Ensured index {} exists", UNIQUE_BREED_PER_ANIMAL_TYPE);

    // The composite primary key leads with pet_id, so owner lookups need their own index.
    let stmt = Index::create()
        .if_not_exists()
        .name(PET_OWNERSHIP_OWNER_INDEX)
        .table(pet_ownership::Entity)
        .col(pet_ownership::Column::OwnerId)
        .to_owned();
    match db.execute_raw(backend.build(&stmt)).await {
        Ok(_) => info!("Ensured index {} exists", PET_OWNERSHIP_OWNER_INDEX),
        Err(e) => tracing::warn!("Failed to create index {}: {}", PET_OWNERSHIP_OWNER_INDEX, e),
    }

    Ok(())
}
