// SPDX-License-Identifier: MPL-2.0

//! Item store
//!
//! The ordered Collection of media items, keyed by generated id and kept
//! in acceptance order. This is the only shared mutable state in the
//! pipeline; every mutation goes through this contract and fires the
//! change notifier synchronously before returning.

pub mod notifier;

pub use notifier::{ChangeCallback, ChangeNotifier, MediaItemView};

use crate::media::types::{Category, MediaId, MediaItem, RoomType};
use tracing::{debug, warn};

/// Ordered, mutable collection of media items
#[derive(Debug, Default)]
pub struct ItemStore {
    // Sorted by acceptance sequence; inserts are appends in the common case
    items: Vec<MediaItem>,
    notifier: ChangeNotifier,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the consumer callback fired after every mutation
    pub fn set_on_change(&mut self, callback: ChangeCallback) {
        self.notifier.set_callback(callback);
    }

    /// Insert an item at its acceptance-order position
    ///
    /// Items arriving out of completion order still land at the position
    /// their sequence number fixed at acceptance time. An insert carrying
    /// an id already present is ignored. Returns whether the Collection
    /// changed.
    pub fn insert(&mut self, item: MediaItem) -> bool {
        if self.items.iter().any(|existing| existing.id == item.id) {
            warn!(id = %item.id, "Duplicate id, insert ignored");
            return false;
        }
        let position = self
            .items
            .partition_point(|existing| existing.seq <= item.seq);
        debug!(id = %item.id, seq = item.seq, position, "Item inserted");
        self.items.insert(position, item);
        self.notifier.notify(&self.items);
        true
    }

    /// Add a tag to an item; duplicate tags are silent no-ops
    pub fn add_tag(&mut self, id: &MediaId, tag: impl Into<String>) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == *id) else {
            return;
        };
        if item.tags.insert(tag.into()) {
            self.notifier.notify(&self.items);
        }
    }

    /// Remove a tag from an item; absent tags are silent no-ops
    pub fn remove_tag(&mut self, id: &MediaId, tag: &str) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == *id) else {
            return;
        };
        if item.tags.remove(tag) {
            self.notifier.notify(&self.items);
        }
    }

    /// Rename an item
    pub fn set_title(&mut self, id: &MediaId, title: impl Into<String>) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == *id) else {
            return;
        };
        let title = title.into();
        if item.title != title {
            item.title = title;
            self.notifier.notify(&self.items);
        }
    }

    /// Remove an item, releasing its preview; idempotent
    ///
    /// Unknown ids are silent no-ops, so a double-remove from a racing UI
    /// has the same observable effect as a single one.
    pub fn remove(&mut self, id: &MediaId) {
        let Some(position) = self.items.iter().position(|item| item.id == *id) else {
            return;
        };
        let mut item = self.items.remove(position);
        item.preview.release();
        debug!(%id, "Item removed");
        self.notifier.notify(&self.items);
    }

    /// Items associated with the given room type, in Collection order
    pub fn by_room_type(&self, room: &RoomType) -> Vec<&MediaItem> {
        self.items
            .iter()
            .filter(|item| item.context.room_type() == Some(room))
            .collect()
    }

    /// Items associated with the given category, in Collection order
    pub fn by_category(&self, category: &Category) -> Vec<&MediaItem> {
        self.items
            .iter()
            .filter(|item| item.context.category() == Some(category))
            .collect()
    }

    /// Look up one item by id
    pub fn get(&self, id: &MediaId) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// The full Collection, in acceptance order
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Number of items held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the Collection is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Teardown: release every preview and empty the Collection
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        for item in &mut self.items {
            item.preview.release();
        }
        self.items.clear();
        debug!("Store cleared");
        self.notifier.notify(&self.items);
    }
}
