//! Behaviour of the in-memory document store against the store contract.

use assert_matches::assert_matches;
use commons_core::factories::{self, ResearchOverrides, TutorialOverrides};
use commons_core::models::{ContentCategory, ResearchFormInput};
use commons_core::moderation::Moderation;
use commons_core::store::{ContentStore, UploadStatus};
use commons_db::MemoryStore;

fn seeded() -> MemoryStore {
    let howto = factories::tutorial(TutorialOverrides {
        id: Some("h1".into()),
        title: Some("Sheet Press".into()),
        ..Default::default()
    });
    let research = factories::research(ResearchOverrides {
        id: Some("r1".into()),
        title: Some("Bottle caps".into()),
        moderation: Some(Moderation::Accepted),
        ..Default::default()
    });
    MemoryStore::with_documents(vec![howto], vec![research])
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lists_and_fetches_by_slug() {
    let store = seeded();
    assert_eq!(store.list_howtos().await.unwrap().len(), 1);
    assert_eq!(store.list_research().await.unwrap().len(), 1);

    let howto = store.get_howto_by_slug("sheet-press").await.unwrap();
    assert_eq!(howto.map(|h| h.id), Some("h1".to_string()));
    assert!(store.get_research_by_slug("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn title_availability_is_scoped_by_category() {
    let store = seeded();
    assert!(!store
        .is_title_available("Bottle Caps!", ContentCategory::Research, None)
        .await
        .unwrap());
    assert!(store
        .is_title_available("Bottle caps", ContentCategory::Howto, None)
        .await
        .unwrap());
    assert!(store
        .is_title_available("Bottle caps", ContentCategory::Research, Some("r1"))
        .await
        .unwrap());
}

// ---------------------------------------------------------------------------
// Uploads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_assigns_id_and_completes() {
    let store = MemoryStore::new();
    let mut status_rx = store.upload_status();

    let status = store
        .upload_research(ResearchFormInput {
            title: "Plastic Shredder".into(),
            description: "Shreds".into(),
            ..Default::default()
        })
        .await;

    assert!(status.complete);
    let id = status.document_id.clone().expect("id assigned");
    assert_eq!(id.len(), 32);
    assert_eq!(*status_rx.borrow_and_update(), status);

    let stored = store.get_research_by_slug("plastic-shredder").await.unwrap();
    assert_eq!(stored.map(|r| r.id), Some(id));
}

#[tokio::test]
async fn upload_with_existing_id_updates_in_place() {
    let store = seeded();
    let status = store
        .upload_research(ResearchFormInput {
            id: Some("r1".into()),
            title: "Bottle caps".into(),
            description: "Updated".into(),
            slug: "bottle-caps".into(),
            moderation: Moderation::AwaitingModeration,
            ..Default::default()
        })
        .await;

    assert!(status.complete);
    let all = store.list_research().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].description, "Updated");
    assert_eq!(all[0].moderation, Moderation::AwaitingModeration);
    assert!(all[0].modified >= all[0].created);
}

#[tokio::test]
async fn upload_with_taken_slug_fails_without_storing() {
    let store = seeded();
    let status = store
        .upload_research(ResearchFormInput {
            title: "Bottle caps".into(),
            description: "Duplicate".into(),
            slug: "bottle-caps".into(),
            ..Default::default()
        })
        .await;

    assert!(!status.complete);
    assert_matches!(status.error, Some(ref msg) if msg.contains("bottle-caps"));
    assert_eq!(store.list_research().await.unwrap().len(), 1);
}

#[tokio::test]
async fn reset_returns_status_to_idle() {
    let store = MemoryStore::new();
    store
        .upload_research(ResearchFormInput {
            title: "Beam mould".into(),
            ..Default::default()
        })
        .await;
    store.reset_upload_status();
    assert_eq!(*store.upload_status().borrow(), UploadStatus::default());
}

#[tokio::test]
async fn upload_keeps_author_and_creation_time() {
    let store = MemoryStore::new();
    let status = store
        .upload_research(ResearchFormInput {
            title: "Beam mould".into(),
            description: "Long beams".into(),
            created_by: Some("ana".into()),
            ..Default::default()
        })
        .await;
    assert!(status.complete);

    let stored = store.get_research_by_slug("beam-mould").await.unwrap().unwrap();
    assert_eq!(stored.created_by.as_deref(), Some("ana"));

    let mut edit = ResearchFormInput::from(stored.clone());
    edit.description = "Longer beams".into();
    edit.created_by = None;
    store.upload_research(edit).await;

    let updated = store.get_research_by_slug("beam-mould").await.unwrap().unwrap();
    assert_eq!(updated.created, stored.created);
    assert_eq!(updated.created_by.as_deref(), Some("ana"));
    assert_eq!(updated.description, "Longer beams");
}

#[tokio::test]
async fn upload_without_usable_slug_fails() {
    let store = MemoryStore::new();
    let status = store
        .upload_research(ResearchFormInput {
            title: "???".into(),
            description: "Only punctuation".into(),
            ..Default::default()
        })
        .await;

    assert!(!status.complete);
    assert!(status.error.is_some());
    assert!(store.list_research().await.unwrap().is_empty());
}
