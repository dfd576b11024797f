use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::user;
use crate::error::{RegistryError, Result};
use crate::models::account::{NewUser, validate_new_user, validate_profile_image};
use crate::utils::hash;

/// Create a user, hashing the password before it is stored.
#[instrument(skip(db, payload), fields(username = %payload.username))]
pub async fn create_user<C>(db: &C, payload: NewUser) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    let username = validate_new_user(&payload)?;
    let password = hash::hash_password(&payload.password)?;

    let model = user::ActiveModel {
        username: Set(username.clone()),
        password: Set(password),
        email: Set(payload.email.trim().to_string()),
        first_name: Set(payload.first_name.trim().to_string()),
        last_name: Set(payload.last_name.trim().to_string()),
        profile_image: Set(payload.profile_image),
        ..Default::default()
    };

    let created = model.insert(db).await.map_err(|e| {
        RegistryError::from(e).on_conflict(|| format!("Username '{username}' is already taken"))
    })?;

    info!(id = created.id, "User created");
    Ok(created)
}

pub async fn find_user_by_username<C>(db: &C, username: &str) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    let found = user::Entity::find()
        .filter(user::Column::Username.eq(username.trim()))
        .one(db)
        .await?;
    Ok(found)
}

pub fn check_password(user: &user::Model, password: &str) -> Result<bool> {
    Ok(hash::verify_password(password, &user.password)?)
}

/// Set or clear the profile image of a user.
#[instrument(skip(db))]
pub async fn set_profile_image<C>(
    db: &C,
    user_id: i32,
    profile_image: Option<String>,
) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    validate_profile_image(profile_image.as_deref())?;

    let current = user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("User {user_id} not found")))?;

    let mut active: user::ActiveModel = current.into();
    active.profile_image = Set(profile_image);
    Ok(active.update(db).await?)
}

/// Delete a user; their ownership rows go with them, the pets stay.
#[instrument(skip(db))]
pub async fn delete_user<C>(db: &C, id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = user::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(RegistryError::NotFound(format!("User {id} not found")));
    }

    info!("User deleted");
    Ok(())
}
