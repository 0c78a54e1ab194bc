use entity_store::EntityClient;
use record_service::lifecycle::RecordSystem;
use record_service::message_store::MessageError;
use record_service::model::{Message, User, UserPatch};
use record_service::user_store::UserError;
use std::collections::HashSet;

/// Full end-to-end run through the message store: create two messages with
/// generated ids, list, patch the first one's text, delete the second, list
/// again.
#[tokio::test]
async fn test_message_crud_scenario() {
    let system = RecordSystem::new();

    let first = system
        .message_client
        .create(Message::new("hi"))
        .await
        .expect("Failed to create first message");
    assert_eq!(first.id, Some(1));
    assert_eq!(first.text, "hi");

    let second = system
        .message_client
        .create(Message::new("yo"))
        .await
        .expect("Failed to create second message");
    assert_eq!(second.id, Some(2));

    let all = system.message_client.list().await.expect("Failed to list");
    let texts: HashSet<String> = all.iter().map(|m| m.text.clone()).collect();
    assert_eq!(all.len(), 2);
    assert!(texts.contains("hi") && texts.contains("yo"));

    let patched = system
        .message_client
        .update_text(1, "bye")
        .await
        .expect("Failed to patch text");
    assert_eq!(patched.id, Some(1));
    assert_eq!(patched.text, "bye");

    system
        .message_client
        .delete(2)
        .await
        .expect("Failed to delete");

    let remaining = system.message_client.list().await.expect("Failed to list");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, Some(1));
    assert_eq!(remaining[0].text, "bye");

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_message_patch_preserves_summary() {
    let system = RecordSystem::new();

    let stored = system
        .message_client
        .create(Message::new("draft").with_summary("work in progress"))
        .await
        .unwrap();

    let patched = system
        .message_client
        .update_text(stored.id.unwrap(), "final")
        .await
        .unwrap();
    assert_eq!(patched.text, "final");
    assert_eq!(patched.summary.as_deref(), Some("work in progress"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_message_modify_is_an_upsert() {
    let system = RecordSystem::new();

    // Unknown id: modify creates the entry instead of failing.
    let mut message = Message::new("out of nowhere");
    message.id = Some(77);
    let stored = system.message_client.modify(message).await.unwrap();
    assert_eq!(stored.id, Some(77));

    let fetched = system.message_client.get(77).await.unwrap();
    assert_eq!(fetched.text, "out of nowhere");

    // But patching an unknown id is an explicit not-found.
    let result = system.message_client.update_text(78, "nope").await;
    assert!(matches!(result, Err(MessageError::NotFound(_))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleted_message_is_not_found() {
    let system = RecordSystem::new();

    let stored = system
        .message_client
        .create(Message::new("ephemeral"))
        .await
        .unwrap();
    let id = stored.id.unwrap();

    system.message_client.delete(id).await.unwrap();
    let result = system.message_client.get(id).await;
    assert!(matches!(result, Err(MessageError::NotFound(_))));

    // Deleting again is still success.
    system.message_client.delete(id).await.unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_user_registration_round_trip() {
    let system = RecordSystem::new();

    let alice = User::new(1, "Alice", 30).with_ip_address("10.0.0.1");
    let stored = system.user_client.register(alice.clone()).await.unwrap();
    assert_eq!(stored, alice);

    let fetched = system.user_client.get(1).await.unwrap();
    assert_eq!(fetched, alice);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_user_without_id_is_rejected() {
    let system = RecordSystem::new();

    let mut nobody = User::new(0, "Nobody", 0);
    nobody.id = None;
    let result = system.user_client.register(nobody).await;
    assert!(matches!(result, Err(UserError::MissingId)));
    assert!(system.user_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_user_profile_merge() {
    let system = RecordSystem::new();

    let bob = User::new(2, "Bob", 40).with_ip_address("192.168.1.2");
    system.user_client.register(bob).await.unwrap();

    // Name-only patch: age and ip address are preserved.
    let updated = system
        .user_client
        .update_profile(
            2,
            UserPatch {
                name: Some("Robert".to_string()),
                age: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Robert");
    assert_eq!(updated.age, 40);
    assert_eq!(updated.ip_address.as_deref(), Some("192.168.1.2"));

    // Patching an unregistered user is a not-found, store unchanged.
    let result = system
        .user_client
        .update_profile(
            9,
            UserPatch {
                name: Some("Ghost".to_string()),
                age: None,
            },
        )
        .await;
    assert!(matches!(result, Err(UserError::NotFound(_))));
    assert_eq!(system.user_client.list().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

/// Regression test for the lost-update race: a name-only patch and an
/// age-only patch racing on the same user must both be reflected in the
/// final record.
#[tokio::test]
async fn test_concurrent_profile_updates_both_land() {
    let system = RecordSystem::new();

    system
        .user_client
        .register(User::new(3, "Carol", 25))
        .await
        .unwrap();

    let name_client = system.user_client.clone();
    let age_client = system.user_client.clone();

    let patch_name = tokio::spawn(async move {
        name_client
            .update_profile(
                3,
                UserPatch {
                    name: Some("Caroline".to_string()),
                    age: None,
                },
            )
            .await
    });
    let patch_age = tokio::spawn(async move {
        age_client
            .update_profile(
                3,
                UserPatch {
                    name: None,
                    age: Some(26),
                },
            )
            .await
    });

    patch_name.await.unwrap().unwrap();
    patch_age.await.unwrap().unwrap();

    let final_user = system.user_client.get(3).await.unwrap();
    assert_eq!(final_user.name, "Caroline");
    assert_eq!(final_user.age, 26);

    system.shutdown().await.unwrap();
}

/// Concurrent message creation: every insert without an id must receive its
/// own id, with none skipped-then-reused and none handed out twice.
#[tokio::test]
async fn test_concurrent_message_creation_yields_distinct_ids() {
    let system = RecordSystem::new();

    let mut handles = vec![];
    for i in 0..1000 {
        let client = system.message_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create(Message::new(format!("message {i}")))
                .await
                .unwrap()
                .id
                .unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()), "duplicate id handed out");
    }
    assert_eq!(ids.len(), 1000);
    assert!(ids.iter().all(|id| (1..=1000).contains(id)));

    assert_eq!(system.message_client.list().await.unwrap().len(), 1000);

    system.shutdown().await.unwrap();
}

/// The two stores are fully independent: ids and contents never bleed
/// between kinds.
#[tokio::test]
async fn test_stores_are_independent() {
    let system = RecordSystem::new();

    system
        .message_client
        .create(Message::new("only message"))
        .await
        .unwrap();
    system
        .user_client
        .register(User::new(1, "Dave", 50))
        .await
        .unwrap();

    assert_eq!(system.message_client.list().await.unwrap().len(), 1);
    assert_eq!(system.user_client.list().await.unwrap().len(), 1);

    system.message_client.delete(1).await.unwrap();
    assert!(system.message_client.list().await.unwrap().is_empty());
    assert_eq!(system.user_client.list().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}
