// SPDX-License-Identifier: MPL-2.0

//! Ingestion pipeline
//!
//! Orchestrates the full flow from acquisition to notification:
//!
//! ```text
//! ┌──────────────┐    ┌───────────┐    ┌─────────┐    ┌────────────┐
//! │ Picker /     │ ──▶│ Validator │ ──▶│ Encoder │ ──▶│ Item Store │
//! │ Camera frame │    │ (policy)  │    │ (async) │    │ + Notifier │
//! └──────────────┘    └───────────┘    └─────────┘    └────────────┘
//! ```
//!
//! Tagging and removal flow from UI intent straight into the store,
//! bypassing validation and encoding.
//!
//! # Design Principles
//!
//! 1. **Partial-failure tolerance**: one rejected or failed record never
//!    blocks its siblings
//! 2. **Progressive feedback**: every finished item is inserted (and the
//!    consumer notified) as soon as it is ready, not at batch completion
//! 3. **Stable order**: Collection order is acceptance order, fixed before
//!    any encoding starts

pub mod ingest;

pub use ingest::{BatchReport, IngestPipeline};
