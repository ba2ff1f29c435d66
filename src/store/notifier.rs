// SPDX-License-Identifier: MPL-2.0

//! Change notification
//!
//! Projects the Collection into the shape the external consumer (the
//! parent form) expects and invokes the registered callback. Owns no
//! state; the mapping is pure and total. A panicking callback propagates
//! to the mutating caller, it is never swallowed here.

use crate::media::types::{MediaItem, MediaKind};
use serde::Serialize;
use std::sync::Arc;

/// Callback registered by the external consumer
pub type ChangeCallback = Box<dyn Fn(&[MediaItemView]) + Send>;

/// External projection of one [`MediaItem`]
#[derive(Debug, Clone, Serialize)]
pub struct MediaItemView {
    /// Item identifier
    pub id: String,
    /// Photo or video
    pub kind: MediaKind,
    /// Encoded data URL when encoding succeeded, preview token otherwise
    pub transport_value: String,
    /// Human label
    pub title: String,
    /// Tags in stable (sorted) order
    pub tags: Vec<String>,
    /// Room association, when any
    pub room_type: Option<String>,
    /// Category association, when any
    pub category: Option<String>,
    /// Raw source reference for consumers capable of binary transport;
    /// not part of the text serialization
    #[serde(skip)]
    pub binary: Arc<[u8]>,
}

impl MediaItemView {
    /// Project one item
    pub fn from_item(item: &MediaItem) -> Self {
        let transport_value = match &item.encoded {
            Some(encoded) => encoded.to_data_url(),
            None => item.preview.token().to_string(),
        };
        MediaItemView {
            id: item.id.to_string(),
            kind: item.kind,
            transport_value,
            title: item.title.clone(),
            tags: item.tags.iter().cloned().collect(),
            room_type: item.context.room_type().map(|r| r.as_str().to_string()),
            category: item.context.category().map(|c| c.as_str().to_string()),
            binary: Arc::clone(&item.source),
        }
    }
}

/// Holds the registered callback and fires it with the projected Collection
#[derive(Default)]
pub struct ChangeNotifier {
    callback: Option<ChangeCallback>,
}

impl ChangeNotifier {
    /// Register the consumer callback, replacing any previous one
    pub fn set_callback(&mut self, callback: ChangeCallback) {
        self.callback = Some(callback);
    }

    /// Project the Collection and invoke the callback, if registered
    pub fn notify(&self, items: &[MediaItem]) {
        if let Some(callback) = &self.callback {
            let views: Vec<MediaItemView> = items.iter().map(MediaItemView::from_item).collect();
            callback(&views);
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("registered", &self.callback.is_some())
            .finish()
    }
}
