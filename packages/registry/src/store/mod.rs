//! Persistence helpers over the entities.
//!
//! Each helper validates its input, performs the write through SeaORM and
//! classifies constraint failures into [`crate::RegistryError`]. All of them
//! accept any [`sea_orm::ConnectionTrait`], so they compose inside a
//! transaction.

mod animals;
mod ownership;
mod pets;
mod users;

pub use animals::{
    breed_label, breeds_of, create_animal_type, create_breed, delete_animal_type, delete_breed,
    find_animal_type_by_name, find_breed,
};
pub use ownership::{
    add_owner, find_ownership, ownership_label, owners_of, pets_of_user, remove_owner, set_role,
};
pub use pets::{
    animal_type_of, create_pet, delete_pet, find_pet, pet_label, pets_of_breed, reassign_breed,
    rename_pet,
};
pub use users::{check_password, create_user, delete_user, find_user_by_username, set_profile_image};
