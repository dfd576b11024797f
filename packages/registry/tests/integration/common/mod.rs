use sea_orm::{DatabaseConnection, EntityTrait};

use pet_registry::config::DatabaseConfig;
use pet_registry::database;
use pet_registry::entity::{animal_type, breed, pet, user};
use pet_registry::models::account::NewUser;
use pet_registry::models::pet::NewPet;
use pet_registry::store;

/// A private in-memory SQLite database with the schema applied.
///
/// SQLite gives every connection its own in-memory database, so the pool is
/// pinned to a single connection.
pub struct TestDb {
    pub db: DatabaseConnection,
}

impl TestDb {
    pub async fn spawn() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        let db = database::init_db(&config)
            .await
            .expect("Failed to initialize test database");
        Self { db }
    }

    /// Animal type by name, created on first use.
    pub async fn animal_type(&self, name: &str) -> animal_type::Model {
        match store::find_animal_type_by_name(&self.db, name).await.unwrap() {
            Some(existing) => existing,
            None => store::create_animal_type(&self.db, name)
                .await
                .expect("Failed to create animal type"),
        }
    }

    pub async fn breed(&self, animal: &str, name: &str) -> breed::Model {
        let animal_type = self.animal_type(animal).await;
        store::create_breed(&self.db, animal_type.id, name)
            .await
            .expect("Failed to create breed")
    }

    pub async fn pet(&self, name: &str, breed_id: i32) -> pet::Model {
        store::create_pet(&self.db, NewPet::new(name, breed_id))
            .await
            .expect("Failed to create pet")
    }

    pub async fn user(&self, username: &str) -> user::Model {
        store::create_user(&self.db, NewUser::new(username, "securepass"))
            .await
            .expect("Failed to create user")
    }

    /// Number of rows in the table of `E`.
    pub async fn count<E: EntityTrait>(&self) -> usize {
        E::find().all(&self.db).await.unwrap().len()
    }
}
