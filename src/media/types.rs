// SPDX-License-Identifier: MPL-2.0

//! Shared types for the media ingestion pipeline

use crate::constants::PREVIEW_SCHEME;
use crate::errors::{EncodeError, PipelineError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

/// Media kind, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still photograph
    Photo,
    /// Video clip
    Video,
}

impl MediaKind {
    /// Get display name for the kind, used as a last-resort item title
    pub fn display_name(&self) -> &'static str {
        match self {
            MediaKind::Photo => "Photo",
            MediaKind::Video => "Video",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Opaque unique item identifier, assigned at creation and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaId(Uuid);

impl MediaId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        MediaId(Uuid::new_v4())
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque room-sharing configuration label (e.g. "double-share")
///
/// The pipeline validates non-emptiness only; enumeration and display
/// labels belong to the form layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomType(String);

impl RoomType {
    /// Create a room type label, rejecting empty or whitespace-only input
    pub fn new(label: impl Into<String>) -> Result<Self, PipelineError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(PipelineError::Config(
                "room type label must not be empty".to_string(),
            ));
        }
        Ok(RoomType(label))
    }

    /// The label as supplied by the form layer
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque common-area facility label (e.g. "lifts", "dining")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    /// Create a category label, rejecting empty or whitespace-only input
    pub fn new(label: impl Into<String>) -> Result<Self, PipelineError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(PipelineError::Config(
                "category label must not be empty".to_string(),
            ));
        }
        Ok(Category(label))
    }

    /// The label as supplied by the form layer
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Association context for an acquisition
///
/// An enum rather than two optional fields: an item can be tied to a room
/// type or to a common-area category or to neither, never to both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcquisitionContext {
    /// No association (general listing media)
    General,
    /// Tied to a room-sharing configuration
    Room(RoomType),
    /// Tied to a common-area facility
    CommonArea(Category),
}

impl AcquisitionContext {
    /// The room type, when this context names one
    pub fn room_type(&self) -> Option<&RoomType> {
        match self {
            AcquisitionContext::Room(room) => Some(room),
            _ => None,
        }
    }

    /// The category, when this context names one
    pub fn category(&self) -> Option<&Category> {
        match self {
            AcquisitionContext::CommonArea(category) => Some(category),
            _ => None,
        }
    }

    /// Human label for title defaulting
    pub fn label(&self) -> Option<&str> {
        match self {
            AcquisitionContext::General => None,
            AcquisitionContext::Room(room) => Some(room.as_str()),
            AcquisitionContext::CommonArea(category) => Some(category.as_str()),
        }
    }
}

/// One file as handed over by the device file chooser
#[derive(Debug, Clone)]
pub struct PickedFile {
    /// Raw file contents
    pub bytes: Vec<u8>,
    /// File name as reported by the chooser, if any
    pub name: Option<String>,
}

impl PickedFile {
    /// Convenience constructor for nameless payloads
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        PickedFile { bytes, name: None }
    }
}

/// Normalized "raw media acquired" record
///
/// Produced by both acquisition paths (file picker and camera freeze-frame)
/// and consumed by the validator.
#[derive(Debug, Clone)]
pub struct RawAcquisition {
    /// The binary payload
    pub payload: Arc<[u8]>,
    /// Declared media kind
    pub kind: MediaKind,
    /// Target room or category
    pub context: AcquisitionContext,
    /// Source label (file name) for title defaulting
    pub label: Option<String>,
}

/// Short-lived, locally-resolvable view into an item's source bytes
///
/// Usable for on-screen display until released. Released on item removal
/// and on pipeline teardown; resolving after release yields nothing.
#[derive(Debug, Clone)]
pub struct PreviewRef {
    token: String,
    data: Option<Arc<[u8]>>,
}

impl PreviewRef {
    pub(crate) fn new(id: &MediaId, data: Arc<[u8]>) -> Self {
        PreviewRef {
            token: format!("{}://{}", PREVIEW_SCHEME, id),
            data: Some(data),
        }
    }

    /// Opaque token handed to consumers that render the preview
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The viewable bytes, or `None` once released
    pub fn resolve(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Drop the underlying view; idempotent
    pub fn release(&mut self) {
        self.data = None;
    }

    /// Whether the view has been released
    pub fn is_released(&self) -> bool {
        self.data.is_none()
    }
}

/// Transportable text encoding of a binary payload
///
/// Standard base64 carried with its sniffed MIME type, renderable as a
/// data URL for structured submission payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPayload {
    mime: String,
    base64: String,
}

impl EncodedPayload {
    /// Encode `bytes` under the given MIME type
    pub fn encode(mime: impl Into<String>, bytes: &[u8]) -> Self {
        EncodedPayload {
            mime: mime.into(),
            base64: STANDARD.encode(bytes),
        }
    }

    /// MIME type of the encoded content
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// The raw base64 text
    pub fn as_base64(&self) -> &str {
        &self.base64
    }

    /// Render as a data URL for inclusion in a submission payload
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }

    /// Decode back to the original bytes
    pub fn decode(&self) -> Result<Vec<u8>, EncodeError> {
        STANDARD
            .decode(&self.base64)
            .map_err(|e| EncodeError::Failed(e.to_string()))
    }
}

/// A single validated, (possibly) encoded unit of user-supplied media
#[derive(Debug, Clone)]
pub struct MediaItem {
    /// Unique identifier, immutable for the pipeline's lifetime
    pub id: MediaId,
    /// Photo or video, fixed at creation
    pub kind: MediaKind,
    /// Acceptance ordinal; fixes the Collection position independent of
    /// encode completion order
    pub(crate) seq: u64,
    /// Original binary payload, owned until removal
    pub source: Arc<[u8]>,
    /// On-screen preview view, released on removal or teardown
    pub preview: PreviewRef,
    /// Transportable encoding, present only when attempted and successful
    pub encoded: Option<EncodedPayload>,
    /// Human label
    pub title: String,
    /// Free-form tags; duplicates ignored, order irrelevant
    pub tags: BTreeSet<String>,
    /// Room or category association
    pub context: AcquisitionContext,
}

impl MediaItem {
    /// Acceptance ordinal within the pipeline
    pub fn seq(&self) -> u64 {
        self.seq
    }
}
