use sea_orm::*;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::entity::{pet, pet_ownership, user};
use crate::error::{RegistryError, Result};
use crate::models::ownership::validate_role;

use super::pets::find_pet;

/// Register `owner_id` as an owner of `pet_id`.
///
/// `role` defaults to [`pet_ownership::DEFAULT_ROLE`]. A second registration
/// of the same pair fails with [`RegistryError::Conflict`]; change the role
/// with [`set_role`] instead.
#[instrument(skip(db))]
pub async fn add_owner<C>(
    db: &C,
    pet_id: Uuid,
    owner_id: i32,
    role: Option<&str>,
) -> Result<pet_ownership::Model>
where
    C: ConnectionTrait,
{
    let role = role.map(validate_role).transpose()?;

    find_pet(db, pet_id).await?;
    user::Entity::find_by_id(owner_id)
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("User {owner_id} not found")))?;

    let mut model = pet_ownership::ActiveModel {
        pet_id: Set(pet_id),
        owner_id: Set(owner_id),
        ..Default::default()
    };
    if let Some(role) = role {
        model.role = Set(role);
    }

    let created = model.insert(db).await.map_err(|e| {
        RegistryError::from(e)
            .on_conflict(|| "User already owns this pet".to_string())
            .on_missing_parent(|| format!("Pet {pet_id} or user {owner_id} not found"))
    })?;

    info!(role = %created.role, "Owner registered");
    Ok(created)
}

pub async fn find_ownership<C>(db: &C, pet_id: Uuid, owner_id: i32) -> Result<pet_ownership::Model>
where
    C: ConnectionTrait,
{
    pet_ownership::Entity::find_by_id((pet_id, owner_id))
        .one(db)
        .await?
        .ok_or_else(|| {
            RegistryError::NotFound(format!("User {owner_id} does not own pet {pet_id}"))
        })
}

/// Change the role of an existing ownership. `registered_at` is left untouched.
#[instrument(skip(db))]
pub async fn set_role<C>(
    db: &C,
    pet_id: Uuid,
    owner_id: i32,
    role: &str,
) -> Result<pet_ownership::Model>
where
    C: ConnectionTrait,
{
    let role = validate_role(role)?;
    let mut active: pet_ownership::ActiveModel = find_ownership(db, pet_id, owner_id).await?.into();
    active.role = Set(role);
    Ok(active.update(db).await?)
}

#[instrument(skip(db))]
pub async fn remove_owner<C>(db: &C, pet_id: Uuid, owner_id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = pet_ownership::Entity::delete_by_id((pet_id, owner_id))
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Err(RegistryError::NotFound(format!(
            "User {owner_id} does not own pet {pet_id}"
        )));
    }

    info!("Owner removed");
    Ok(())
}

/// Owners of a pet with their ownership rows, oldest registration first.
pub async fn owners_of<C>(db: &C, pet_id: Uuid) -> Result<Vec<(pet_ownership::Model, user::Model)>>
where
    C: ConnectionTrait,
{
    let rows = pet_ownership::Entity::find()
        .filter(pet_ownership::Column::PetId.eq(pet_id))
        .find_also_related(user::Entity)
        .order_by_asc(pet_ownership::Column::RegisteredAt)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(ownership, owner)| owner.map(|owner| (ownership, owner)))
        .collect())
}

/// Pets owned by a user with their ownership rows, oldest registration first.
pub async fn pets_of_user<C>(db: &C, owner_id: i32) -> Result<Vec<(pet_ownership::Model, pet::Model)>>
where
    C: ConnectionTrait,
{
    let rows = pet_ownership::Entity::find()
        .filter(pet_ownership::Column::OwnerId.eq(owner_id))
        .find_also_related(pet::Entity)
        .order_by_asc(pet_ownership::Column::RegisteredAt)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(ownership, pet)| pet.map(|pet| (ownership, pet)))
        .collect())
}

/// "alice - Coco (co-owner)".
pub async fn ownership_label<C>(db: &C, ownership: &pet_ownership::Model) -> Result<String>
where
    C: ConnectionTrait,
{
    let pet = find_pet(db, ownership.pet_id).await?;
    let owner = user::Entity::find_by_id(ownership.owner_id)
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("User {} not found", ownership.owner_id)))?;

    Ok(format!("{} - {} ({})", owner, pet.name, ownership.role))
}
