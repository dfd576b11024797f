use sea_orm::*;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::entity::{animal_type, breed, pet};
use crate::error::{RegistryError, Result};
use crate::models::pet::{NewPet, validate_pet_name};

use super::animals::{breed_label, find_breed};

#[instrument(skip(db, payload), fields(breed_id = payload.breed_id))]
pub async fn create_pet<C>(db: &C, payload: NewPet) -> Result<pet::Model>
where
    C: ConnectionTrait,
{
    let name = validate_pet_name(&payload.name)?;
    find_breed(db, payload.breed_id).await?;

    // `id` comes from ActiveModelBehavior::new.
    let model = pet::ActiveModel {
        name: Set(name),
        birth_date: Set(payload.birth_date),
        breed_id: Set(payload.breed_id),
        ..Default::default()
    };

    let breed_id = payload.breed_id;
    let created = model.insert(db).await.map_err(|e| {
        RegistryError::from(e).on_missing_parent(|| format!("Breed {breed_id} not found"))
    })?;

    info!(id = %created.id, "Pet created");
    Ok(created)
}

pub async fn find_pet<C>(db: &C, id: Uuid) -> Result<pet::Model>
where
    C: ConnectionTrait,
{
    pet::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("Pet {id} not found")))
}

#[instrument(skip(db))]
pub async fn rename_pet<C>(db: &C, id: Uuid, name: &str) -> Result<pet::Model>
where
    C: ConnectionTrait,
{
    let name = validate_pet_name(name)?;
    let mut active: pet::ActiveModel = find_pet(db, id).await?.into();
    active.name = Set(name);
    Ok(active.update(db).await?)
}

/// Move a pet to another breed. Its animal type follows the new breed.
#[instrument(skip(db))]
pub async fn reassign_breed<C>(db: &C, id: Uuid, breed_id: i32) -> Result<pet::Model>
where
    C: ConnectionTrait,
{
    let current = find_pet(db, id).await?;
    find_breed(db, breed_id).await?;

    let mut active: pet::ActiveModel = current.into();
    active.breed_id = Set(breed_id);
    let updated = active.update(db).await.map_err(|e| {
        RegistryError::from(e).on_missing_parent(|| format!("Breed {breed_id} not found"))
    })?;

    info!("Pet moved to another breed");
    Ok(updated)
}

/// All pets of a breed, served by the `breed_id` index.
pub async fn pets_of_breed<C>(db: &C, breed_id: i32) -> Result<Vec<pet::Model>>
where
    C: ConnectionTrait,
{
    let pets = pet::Entity::find()
        .filter(pet::Column::BreedId.eq(breed_id))
        .order_by_asc(pet::Column::Name)
        .all(db)
        .await?;
    Ok(pets)
}

/// The animal type of a pet, read through its current breed.
///
/// Nothing is cached: the pet row is re-read on every call, so the result
/// reflects the latest breed assignment.
pub async fn animal_type_of<C>(db: &C, pet_id: Uuid) -> Result<animal_type::Model>
where
    C: ConnectionTrait,
{
    let pet = find_pet(db, pet_id).await?;
    let breed = breed::Entity::find_by_id(pet.breed_id)
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("Breed {} not found", pet.breed_id)))?;

    animal_type::Entity::find_by_id(breed.animal_type_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            RegistryError::NotFound(format!("Animal type {} not found", breed.animal_type_id))
        })
}

/// "Coco (Dog - Poodle)".
pub async fn pet_label<C>(db: &C, pet: &pet::Model) -> Result<String>
where
    C: ConnectionTrait,
{
    let breed = find_breed(db, pet.breed_id).await?;
    Ok(format!("{} ({})", pet.name, breed_label(db, &breed).await?))
}

/// Delete a pet; its ownership rows go with it.
#[instrument(skip(db))]
pub async fn delete_pet<C>(db: &C, id: Uuid) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = pet::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(RegistryError::NotFound(format!("Pet {id} not found")));
    }

    info!("Pet deleted");
    Ok(())
}
