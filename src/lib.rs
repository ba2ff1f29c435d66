// SPDX-License-Identifier: MPL-2.0

//! Listing Media - media capture and ingestion for property listings
//!
//! This library implements the media pipeline used when a user attaches
//! photographs and video clips to a listing, per room type and per
//! common-area category: acquisition (file picker or live camera),
//! validation, transportable encoding, metadata tracking, and change
//! notification to the parent form.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`backends`]: capture source adapter (file picker, camera trait)
//! - [`media`]: format detection, validation, encoding, data model
//! - [`store`]: the ordered item Collection and its change notifier
//! - [`pipelines`]: batch ingestion orchestration
//! - [`config`]: the declarative per-kind policy table
//!
//! # Example
//!
//! ```no_run
//! use listing_media::{AcquisitionContext, IngestPipeline, MediaKind, PickedFile, RoomType};
//!
//! # async fn example() -> Result<(), listing_media::PipelineError> {
//! let mut pipeline = IngestPipeline::default();
//! pipeline.set_on_change(Box::new(|views| {
//!     println!("collection now holds {} items", views.len());
//! }));
//!
//! let context = AcquisitionContext::Room(RoomType::new("double-share")?);
//! let files = vec![PickedFile::from_bytes(std::fs::read("room.jpg").unwrap())];
//! let report = pipeline
//!     .ingest_picker(files, MediaKind::Photo, &context, None)
//!     .await;
//! if let Some(summary) = report.summary() {
//!     eprintln!("{summary}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod media;
pub mod pipelines;
pub mod store;

// Re-export commonly used types
pub use backends::{CameraCapability, CameraDescriptor, CameraFacing, CameraSession, CameraStream};
pub use config::{IngestPolicy, KindPolicy};
pub use errors::{CaptureError, EncodeError, PipelineError, PipelineResult, RejectReason};
pub use media::{
    AcquisitionContext, Category, EncodedPayload, IngestWarning, MediaId, MediaItem, MediaKind,
    PickedFile, PreviewRef, RawAcquisition, RoomType,
};
pub use pipelines::{BatchReport, IngestPipeline};
pub use store::{ChangeCallback, ItemStore, MediaItemView};
