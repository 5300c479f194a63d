//! Integration tests for the mentors domain service

use mentors_service::contract::MentorsError;
use mentors_service::domain::Service;
use std::sync::Arc;

mod common;
use common::{sample_draft, MockMentorRepo};

fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

fn create_test_service_with_repo() -> (Service, Arc<MockMentorRepo>) {
    let mentors_repo = Arc::new(MockMentorRepo::new());
    let service = Service::new(mentors_repo.clone());
    (service, mentors_repo)
}

#[tokio::test]
async fn test_create_then_list_round_trips_topics() {
    let (service, _repo) = create_test_service_with_repo();
    let draft = sample_draft();

    print_test_header(
        "test_create_then_list_round_trips_topics",
        "Create then list contains exactly one record equal to the input except the added id.",
    );

    let created = service
        .create_mentor(draft.clone())
        .await
        .expect("Failed to create mentor");

    assert!(!created.id.is_empty());

    let listed = service.list_mentors().await.expect("Failed to list mentors");
    println!("✅ Listed {} mentor(s)", listed.len());

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], draft.with_id(created.id.clone()));
    assert_eq!(listed[0].topics, vec!["x".to_string(), "y".to_string()]);
}

#[tokio::test]
async fn test_create_generates_unique_ids() {
    let (service, _repo) = create_test_service_with_repo();

    print_test_header(
        "test_create_generates_unique_ids",
        "Two creates of the same draft receive distinct non-empty ids.",
    );

    let first = service
        .create_mentor(sample_draft())
        .await
        .expect("Failed to create first mentor");
    let second = service
        .create_mentor(sample_draft())
        .await
        .expect("Failed to create second mentor");

    assert!(!first.id.is_empty());
    assert!(!second.id.is_empty());
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_update_existing_mentor() {
    let (service, _repo) = create_test_service_with_repo();

    print_test_header(
        "test_update_existing_mentor",
        "Update reflects every changed field and leaves the id unchanged.",
    );

    let created = service
        .create_mentor(sample_draft())
        .await
        .expect("Failed to create mentor");

    let mut draft = sample_draft();
    draft.name = "B".to_string();
    draft.topics = vec!["z".to_string()];
    draft.featured = true;
    draft.reviews = 99;

    let changes = service
        .update_mentor(&created.id, draft.clone())
        .await
        .expect("Failed to update mentor");
    assert_eq!(changes, 1);

    let listed = service.list_mentors().await.expect("Failed to list mentors");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], draft.with_id(created.id.clone()));
}

#[tokio::test]
async fn test_update_missing_mentor_is_not_found() {
    let (service, repo) = create_test_service_with_repo();

    print_test_header(
        "test_update_missing_mentor_is_not_found",
        "Updating a non-existent id reports not-found and mutates nothing.",
    );

    let created = service
        .create_mentor(sample_draft())
        .await
        .expect("Failed to create mentor");
    let before = repo.snapshot();

    let err = service
        .update_mentor("no-such-id", sample_draft())
        .await
        .expect_err("Update of missing id should fail");

    assert_eq!(
        err,
        MentorsError::NotFound {
            id: "no-such-id".to_string()
        }
    );
    assert_eq!(repo.snapshot(), before);
    assert_eq!(created.id, before[0].id);
}

#[tokio::test]
async fn test_delete_existing_mentor() {
    let (service, repo) = create_test_service_with_repo();

    print_test_header(
        "test_delete_existing_mentor",
        "Delete removes exactly one record; a subsequent list does not contain it.",
    );

    let keep = service
        .create_mentor(sample_draft())
        .await
        .expect("Failed to create first mentor");
    let gone = service
        .create_mentor(sample_draft())
        .await
        .expect("Failed to create second mentor");

    let changes = service
        .delete_mentor(&gone.id)
        .await
        .expect("Failed to delete mentor");
    assert_eq!(changes, 1);
    assert_eq!(repo.row_count(), 1);

    let listed = service.list_mentors().await.expect("Failed to list mentors");
    assert!(listed.iter().all(|m| m.id != gone.id));
    assert!(listed.iter().any(|m| m.id == keep.id));
}

#[tokio::test]
async fn test_delete_missing_mentor_is_not_found() {
    let (service, repo) = create_test_service_with_repo();

    print_test_header(
        "test_delete_missing_mentor_is_not_found",
        "Deleting a non-existent id reports not-found and does not alter the table.",
    );

    service
        .create_mentor(sample_draft())
        .await
        .expect("Failed to create mentor");
    let before = repo.snapshot();

    let err = service
        .delete_mentor("no-such-id")
        .await
        .expect_err("Delete of missing id should fail");

    assert_eq!(
        err,
        MentorsError::NotFound {
            id: "no-such-id".to_string()
        }
    );
    assert_eq!(repo.snapshot(), before);
}

#[tokio::test]
async fn test_toggle_flips_exactly_once_per_call() {
    let (service, repo) = create_test_service_with_repo();

    print_test_header(
        "test_toggle_flips_exactly_once_per_call",
        "Toggle flips the flag once; two sequential toggles restore the original value.",
    );

    let created = service
        .create_mentor(sample_draft())
        .await
        .expect("Failed to create mentor");
    assert!(created.is_visible);

    let after_first = service
        .toggle_visibility(&created.id)
        .await
        .expect("First toggle failed");
    assert!(!after_first);
    assert!(!repo.snapshot()[0].is_visible);

    let after_second = service
        .toggle_visibility(&created.id)
        .await
        .expect("Second toggle failed");
    assert!(after_second);
    assert!(repo.snapshot()[0].is_visible);
}

#[tokio::test]
async fn test_toggle_missing_mentor_mutates_nothing() {
    let (service, repo) = create_test_service_with_repo();

    print_test_header(
        "test_toggle_missing_mentor_mutates_nothing",
        "Toggling a non-existent id reports not-found and leaves rows untouched.",
    );

    service
        .create_mentor(sample_draft())
        .await
        .expect("Failed to create mentor");
    let before = repo.snapshot();

    let err = service
        .toggle_visibility("no-such-id")
        .await
        .expect_err("Toggle of missing id should fail");

    assert_eq!(
        err,
        MentorsError::NotFound {
            id: "no-such-id".to_string()
        }
    );
    assert_eq!(repo.snapshot(), before);
}

#[tokio::test]
async fn test_seed_fills_empty_repository() {
    let (service, repo) = create_test_service_with_repo();

    print_test_header(
        "test_seed_fills_empty_repository",
        "Seeding an empty table inserts the six reference mentors exactly once.",
    );

    let seeded = service
        .seed_reference_data()
        .await
        .expect("Failed to seed reference data");
    assert_eq!(seeded, 6);
    assert_eq!(repo.row_count(), 6);

    // a second startup against the now non-empty table seeds nothing
    let reseeded = service
        .seed_reference_data()
        .await
        .expect("Failed to re-run seeding");
    assert_eq!(reseeded, 0);
    assert_eq!(repo.row_count(), 6);
}

#[tokio::test]
async fn test_seed_skips_non_empty_repository() {
    let (service, repo) = create_test_service_with_repo();

    print_test_header(
        "test_seed_skips_non_empty_repository",
        "A table holding any row at startup seeds zero additional records.",
    );

    service
        .create_mentor(sample_draft())
        .await
        .expect("Failed to create mentor");

    let seeded = service
        .seed_reference_data()
        .await
        .expect("Failed to run seeding");
    assert_eq!(seeded, 0);
    assert_eq!(repo.row_count(), 1);
}
