use pet_registry::RegistryError;
use pet_registry::entity::{breed, pet};
use pet_registry::store;

use crate::common::TestDb;

mod uniqueness {
    use super::*;

    #[tokio::test]
    async fn same_breed_name_twice_under_one_type_fails() {
        let app = TestDb::spawn().await;
        let dog = app.animal_type("Dog").await;

        store::create_breed(&app.db, dog.id, "Poodle").await.unwrap();
        let second = store::create_breed(&app.db, dog.id, "Poodle").await;

        assert!(matches!(second, Err(RegistryError::Conflict(_))));
        assert_eq!(app.count::<breed::Entity>().await, 1);
    }

    #[tokio::test]
    async fn same_breed_name_under_different_types_is_allowed() {
        let app = TestDb::spawn().await;

        let dog_poodle = app.breed("Dog", "Poodle").await;
        let cat_poodle = app.breed("Cat", "Poodle").await;

        assert_ne!(dog_poodle.id, cat_poodle.id);
        assert_ne!(dog_poodle.animal_type_id, cat_poodle.animal_type_id);
    }

    #[tokio::test]
    async fn breed_for_a_missing_animal_type_is_not_found() {
        let app = TestDb::spawn().await;

        let res = store::create_breed(&app.db, 7, "Poodle").await;

        assert!(matches!(res, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn over_long_breed_name_is_rejected() {
        let app = TestDb::spawn().await;
        let dog = app.animal_type("Dog").await;

        let res = store::create_breed(&app.db, dog.id, &"x".repeat(101)).await;

        assert!(matches!(res, Err(RegistryError::Validation(_))));
    }
}

mod deletion {
    use super::*;

    #[tokio::test]
    async fn breed_with_pets_cannot_be_deleted() {
        let app = TestDb::spawn().await;
        let poodle = app.breed("Dog", "Poodle").await;
        let coco = app.pet("Coco", poodle.id).await;

        let res = store::delete_breed(&app.db, poodle.id).await;

        assert!(matches!(res, Err(RegistryError::Protected(_))));
        assert_eq!(store::find_breed(&app.db, poodle.id).await.unwrap(), poodle);
        assert_eq!(store::find_pet(&app.db, coco.id).await.unwrap(), coco);
    }

    #[tokio::test]
    async fn protected_delete_names_the_breed() {
        let app = TestDb::spawn().await;
        let poodle = app.breed("Dog", "Poodle").await;
        app.pet("Coco", poodle.id).await;

        let err = store::delete_breed(&app.db, poodle.id).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Protected: Breed {} still has pets", poodle.id)
        );
    }

    #[tokio::test]
    async fn breed_without_pets_is_deleted() {
        let app = TestDb::spawn().await;
        let poodle = app.breed("Dog", "Poodle").await;
        let beagle = app.breed("Dog", "Beagle").await;
        app.pet("Snoopy", beagle.id).await;

        store::delete_breed(&app.db, poodle.id).await.unwrap();

        assert!(matches!(
            store::find_breed(&app.db, poodle.id).await,
            Err(RegistryError::NotFound(_))
        ));
        assert_eq!(app.count::<pet::Entity>().await, 1);
    }
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn breeds_of_a_type_are_listed_by_name() {
        let app = TestDb::spawn().await;
        let poodle = app.breed("Dog", "Poodle").await;
        app.breed("Dog", "Beagle").await;
        app.breed("Cat", "Siamese").await;

        let names: Vec<String> = store::breeds_of(&app.db, poodle.animal_type_id)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();

        assert_eq!(names, vec!["Beagle", "Poodle"]);
    }

    #[tokio::test]
    async fn breed_label_includes_the_animal_type() {
        let app = TestDb::spawn().await;
        let poodle = app.breed("Dog", "Poodle").await;

        let label = store::breed_label(&app.db, &poodle).await.unwrap();

        assert_eq!(label, "Dog - Poodle");
    }
}
