use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{animal_type, breed};
use crate::error::{RegistryError, Result};
use crate::models::animal::{validate_animal_type_name, validate_breed_name};

#[instrument(skip(db))]
pub async fn create_animal_type<C>(db: &C, name: &str) -> Result<animal_type::Model>
where
    C: ConnectionTrait,
{
    let name = validate_animal_type_name(name)?;

    let model = animal_type::ActiveModel {
        name: Set(name.clone()),
        ..Default::default()
    };

    let created = model.insert(db).await.map_err(|e| {
        RegistryError::from(e).on_conflict(|| format!("Animal type '{name}' already exists"))
    })?;

    info!(id = created.id, "Animal type created");
    Ok(created)
}

pub async fn find_animal_type_by_name<C>(db: &C, name: &str) -> Result<Option<animal_type::Model>>
where
    C: ConnectionTrait,
{
    let found = animal_type::Entity::find()
        .filter(animal_type::Column::Name.eq(name.trim()))
        .one(db)
        .await?;
    Ok(found)
}

/// Delete an animal type together with its breeds.
///
/// The cascade to `breed` runs inside the same statement, so when any pet
/// still references one of those breeds the database rejects the whole
/// delete and nothing is removed.
#[instrument(skip(db))]
pub async fn delete_animal_type<C>(db: &C, id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = animal_type::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| {
            RegistryError::from(e)
                .on_protected(|| format!("Animal type {id} has breeds that still have pets"))
        })?;

    if result.rows_affected == 0 {
        return Err(RegistryError::NotFound(format!("Animal type {id} not found")));
    }

    info!("Animal type deleted");
    Ok(())
}

#[instrument(skip(db))]
pub async fn create_breed<C>(db: &C, animal_type_id: i32, name: &str) -> Result<breed::Model>
where
    C: ConnectionTrait,
{
    let name = validate_breed_name(name)?;

    animal_type::Entity::find_by_id(animal_type_id)
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("Animal type {animal_type_id} not found")))?;

    let model = breed::ActiveModel {
        animal_type_id: Set(animal_type_id),
        name: Set(name.clone()),
        ..Default::default()
    };

    let created = model.insert(db).await.map_err(|e| {
        RegistryError::from(e)
            .on_conflict(|| format!("Breed '{name}' already exists for this animal type"))
            .on_missing_parent(|| format!("Animal type {animal_type_id} not found"))
    })?;

    info!(id = created.id, "Breed created");
    Ok(created)
}

pub async fn find_breed<C>(db: &C, id: i32) -> Result<breed::Model>
where
    C: ConnectionTrait,
{
    breed::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("Breed {id} not found")))
}

/// Breeds of an animal type, ordered by name.
pub async fn breeds_of<C>(db: &C, animal_type_id: i32) -> Result<Vec<breed::Model>>
where
    C: ConnectionTrait,
{
    let breeds = breed::Entity::find()
        .filter(breed::Column::AnimalTypeId.eq(animal_type_id))
        .order_by_asc(breed::Column::Name)
        .all(db)
        .await?;
    Ok(breeds)
}

/// Delete a breed. Rejected with [`RegistryError::Protected`] while pets reference it.
#[instrument(skip(db))]
pub async fn delete_breed<C>(db: &C, id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = breed::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| {
            RegistryError::from(e).on_protected(|| format!("Breed {id} still has pets"))
        })?;

    if result.rows_affected == 0 {
        return Err(RegistryError::NotFound(format!("Breed {id} not found")));
    }

    info!("Breed deleted");
    Ok(())
}

/// "Dog - Poodle".
pub async fn breed_label<C>(db: &C, breed: &breed::Model) -> Result<String>
where
    C: ConnectionTrait,
{
    let animal_type = animal_type::Entity::find_by_id(breed.animal_type_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            RegistryError::NotFound(format!("Animal type {} not found", breed.animal_type_id))
        })?;

    Ok(format!("{} - {}", animal_type, breed.name))
}
