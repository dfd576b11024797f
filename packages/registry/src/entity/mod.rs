pub mod animal_type;
pub mod breed;
pub mod pet;
pub mod pet_ownership;
pub mod user;
