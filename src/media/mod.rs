// SPDX-License-Identifier: MPL-2.0

//! Media validation and encoding
//!
//! The leaf stages of the ingestion pipeline:
//!
//! - [`detection`]: magic-byte format sniffing
//! - [`validator`]: batch classification against the per-kind policy table
//! - [`encoder`]: item construction and bounded-time base64 encoding
//! - [`types`]: the shared data model ([`MediaItem`] and friends)

pub mod detection;
pub mod encoder;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use encoder::IngestWarning;
pub use types::{
    AcquisitionContext, Category, EncodedPayload, MediaId, MediaItem, MediaKind, PickedFile,
    PreviewRef, RawAcquisition, RoomType,
};
pub use validator::{AcceptedRecord, BatchValidation, RejectedRecord};
