// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the item store and change notifier

mod common;

use listing_media::media::encoder::encode_record;
use listing_media::media::validator::AcceptedRecord;
use listing_media::{
    AcquisitionContext, Category, IngestPolicy, ItemStore, MediaItem, MediaItemView, MediaKind,
    RoomType,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

async fn photo_item(seq: u64, context: AcquisitionContext, label: &str) -> MediaItem {
    let record = AcceptedRecord {
        payload: common::jpeg_bytes().into(),
        kind: MediaKind::Photo,
        context,
        label: Some(label.to_string()),
        mime: "image/jpeg".to_string(),
    };
    let (item, warning) = encode_record(record, seq, &IngestPolicy::default().photo, None).await;
    assert!(warning.is_none());
    item
}

fn counting_store() -> (ItemStore, Arc<AtomicUsize>, Arc<Mutex<Vec<MediaItemView>>>) {
    let mut store = ItemStore::new();
    let notifications = Arc::new(AtomicUsize::new(0));
    let last_views = Arc::new(Mutex::new(Vec::new()));
    let count = Arc::clone(&notifications);
    let views = Arc::clone(&last_views);
    store.set_on_change(Box::new(move |projected| {
        count.fetch_add(1, Ordering::SeqCst);
        *views.lock().unwrap() = projected.to_vec();
    }));
    (store, notifications, last_views)
}

#[tokio::test]
async fn test_insert_notifies_with_projection() {
    let (mut store, notifications, last_views) = counting_store();
    let item = photo_item(0, AcquisitionContext::General, "a.jpg").await;
    let id = item.id;

    assert!(store.insert(item));
    assert_eq!(notifications.load(Ordering::SeqCst), 1);

    let views = last_views.lock().unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].id, id.to_string());
    assert_eq!(views[0].title, "a.jpg");
    assert!(views[0].transport_value.starts_with("data:image/jpeg;base64,"));
    assert!(!views[0].binary.is_empty());
}

#[tokio::test]
async fn test_collection_order_is_acceptance_order() {
    // Completion order differs from acceptance order; sequence wins
    let (mut store, _, _) = counting_store();
    let second = photo_item(2, AcquisitionContext::General, "second").await;
    let first = photo_item(1, AcquisitionContext::General, "first").await;
    store.insert(second);
    store.insert(first);

    let titles: Vec<&str> = store.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["first", "second"]);
}

#[tokio::test]
async fn test_duplicate_id_is_ignored() {
    let (mut store, notifications, _) = counting_store();
    let item = photo_item(0, AcquisitionContext::General, "a.jpg").await;
    let duplicate = item.clone();

    assert!(store.insert(item));
    assert!(!store.insert(duplicate));
    assert_eq!(store.len(), 1);
    assert_eq!(notifications.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_tag_add_remove_round_trip() {
    let (mut store, notifications, _) = counting_store();
    let item = photo_item(0, AcquisitionContext::General, "a.jpg").await;
    let id = item.id;
    store.insert(item);

    store.add_tag(&id, "Kitchen");
    assert_eq!(store.get(&id).unwrap().tags.len(), 1);

    // Duplicate add is a silent no-op with no notification
    store.add_tag(&id, "Kitchen");
    assert_eq!(store.get(&id).unwrap().tags.len(), 1);

    store.remove_tag(&id, "Kitchen");
    assert!(store.get(&id).unwrap().tags.is_empty());

    // Removing a tag never added is a silent no-op
    store.remove_tag(&id, "Balcony");
    assert!(store.get(&id).unwrap().tags.is_empty());

    // insert + add + remove; the two no-ops fired nothing
    assert_eq!(notifications.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let (mut store, notifications, _) = counting_store();
    let item = photo_item(0, AcquisitionContext::General, "a.jpg").await;
    let id = item.id;
    store.insert(item);

    store.remove(&id);
    assert!(store.is_empty());
    let after_first = notifications.load(Ordering::SeqCst);

    store.remove(&id);
    assert!(store.is_empty());
    assert_eq!(notifications.load(Ordering::SeqCst), after_first);
}

#[tokio::test]
async fn test_filtered_views() {
    let double = RoomType::new("double-share").unwrap();
    let dining = Category::new("dining").unwrap();
    let (mut store, _, _) = counting_store();

    store.insert(photo_item(0, AcquisitionContext::Room(double.clone()), "room").await);
    store.insert(photo_item(1, AcquisitionContext::CommonArea(dining.clone()), "hall").await);
    store.insert(photo_item(2, AcquisitionContext::General, "front").await);

    let by_room = store.by_room_type(&double);
    assert_eq!(by_room.len(), 1);
    assert_eq!(by_room[0].title, "room");

    let by_category = store.by_category(&dining);
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].title, "hall");

    // Read-only views never mutate the Collection
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn test_set_title() {
    let (mut store, notifications, _) = counting_store();
    let item = photo_item(0, AcquisitionContext::General, "a.jpg").await;
    let id = item.id;
    store.insert(item);

    store.set_title(&id, "Street view");
    assert_eq!(store.get(&id).unwrap().title, "Street view");

    // Same title again fires nothing
    store.set_title(&id, "Street view");
    assert_eq!(notifications.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_clear_releases_and_notifies_once() {
    let (mut store, notifications, last_views) = counting_store();
    store.insert(photo_item(0, AcquisitionContext::General, "a").await);
    store.insert(photo_item(1, AcquisitionContext::General, "b").await);
    let before = notifications.load(Ordering::SeqCst);

    store.clear();
    assert!(store.is_empty());
    assert_eq!(notifications.load(Ordering::SeqCst), before + 1);
    assert!(last_views.lock().unwrap().is_empty());

    // Clearing an empty store is a no-op
    store.clear();
    assert_eq!(notifications.load(Ordering::SeqCst), before + 1);
}

#[tokio::test]
async fn test_projection_serializes_without_binary() {
    let item = photo_item(0, AcquisitionContext::Room(RoomType::new("twin").unwrap()), "a.jpg").await;
    let view = MediaItemView::from_item(&item);
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["kind"], "photo");
    assert_eq!(json["room_type"], "twin");
    assert!(json["category"].is_null());
    assert!(json.get("binary").is_none(), "raw bytes stay out of the text shape");
    assert!(json["transport_value"]
        .as_str()
        .unwrap()
        .starts_with("data:image/jpeg;base64,"));
}
