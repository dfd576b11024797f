//! Schema for a pet-ownership registry.
//!
//! Five SeaORM entities (animal types, breeds, pets, pet ownerships and
//! users) plus the helpers that create the schema and read and write rows
//! under its constraints.

pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod models;
pub mod schema;
pub mod store;
pub mod utils;

pub use error::{RegistryError, Result};
