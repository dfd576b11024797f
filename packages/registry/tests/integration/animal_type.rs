use sea_orm::EntityTrait;

use pet_registry::RegistryError;
use pet_registry::entity::{animal_type, breed, pet};
use pet_registry::store;

use crate::common::TestDb;

mod creation {
    use super::*;

    #[tokio::test]
    async fn animal_type_names_are_unique() {
        let app = TestDb::spawn().await;

        store::create_animal_type(&app.db, "Dog").await.unwrap();
        let second = store::create_animal_type(&app.db, "Dog").await;

        assert!(matches!(second, Err(RegistryError::Conflict(_))));
        assert_eq!(app.count::<animal_type::Entity>().await, 1);
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_anything_is_written() {
        let app = TestDb::spawn().await;

        let res = store::create_animal_type(&app.db, "   ").await;

        assert!(matches!(res, Err(RegistryError::Validation(_))));
        assert_eq!(app.count::<animal_type::Entity>().await, 0);
    }

    #[tokio::test]
    async fn name_is_stored_trimmed_and_found_by_name() {
        let app = TestDb::spawn().await;

        let created = store::create_animal_type(&app.db, "  Cat ").await.unwrap();
        let found = store::find_animal_type_by_name(&app.db, "Cat")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(created.name, "Cat");
        assert_eq!(found, created);
        assert_eq!(found.to_string(), "Cat");
    }
}

mod deletion {
    use super::*;

    #[tokio::test]
    async fn deleting_an_animal_type_removes_its_breeds() {
        let app = TestDb::spawn().await;
        let poodle = app.breed("Dog", "Poodle").await;
        app.breed("Dog", "Beagle").await;
        app.breed("Cat", "Siamese").await;

        store::delete_animal_type(&app.db, poodle.animal_type_id)
            .await
            .unwrap();

        let remaining = breed::Entity::find().all(&app.db).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Siamese");
    }

    #[tokio::test]
    async fn deletion_is_rejected_while_a_breed_of_the_type_has_pets() {
        let app = TestDb::spawn().await;
        let poodle = app.breed("Dog", "Poodle").await;
        app.breed("Dog", "Beagle").await;
        let coco = app.pet("Coco", poodle.id).await;

        let res = store::delete_animal_type(&app.db, poodle.animal_type_id).await;

        assert!(matches!(res, Err(RegistryError::Protected(_))));
        assert_eq!(app.count::<animal_type::Entity>().await, 1);
        assert_eq!(app.count::<breed::Entity>().await, 2);
        assert_eq!(store::find_pet(&app.db, coco.id).await.unwrap(), coco);
    }

    #[tokio::test]
    async fn deletion_succeeds_once_the_pets_are_gone() {
        let app = TestDb::spawn().await;
        let poodle = app.breed("Dog", "Poodle").await;
        let coco = app.pet("Coco", poodle.id).await;

        assert!(store::delete_animal_type(&app.db, poodle.animal_type_id).await.is_err());
        store::delete_pet(&app.db, coco.id).await.unwrap();
        store::delete_animal_type(&app.db, poodle.animal_type_id)
            .await
            .unwrap();

        assert_eq!(app.count::<breed::Entity>().await, 0);
        assert_eq!(app.count::<pet::Entity>().await, 0);
    }

    #[tokio::test]
    async fn deleting_a_missing_animal_type_is_not_found() {
        let app = TestDb::spawn().await;

        let res = store::delete_animal_type(&app.db, 42).await;

        assert!(matches!(res, Err(RegistryError::NotFound(_))));
    }
}
