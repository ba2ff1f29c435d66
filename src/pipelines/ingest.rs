// SPDX-License-Identifier: MPL-2.0

//! Batch ingestion orchestration

use crate::backends::{self, CameraCapability, picker};
use crate::config::IngestPolicy;
use crate::errors::CaptureError;
use crate::media::encoder::{self, IngestWarning};
use crate::media::types::{AcquisitionContext, MediaId, MediaKind, PickedFile, RawAcquisition};
use crate::media::validator::{self, RejectedRecord};
use crate::store::{ChangeCallback, ItemStore};
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::fmt::Write as _;
use tracing::{info, warn};

/// Outcome of ingesting one acquisition batch
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Ids of the items added to the Collection, in acceptance order
    pub inserted: Vec<MediaId>,
    /// Records the validator turned away
    pub rejected: Vec<RejectedRecord>,
    /// Non-fatal per-item encode problems (items still inserted)
    pub warnings: Vec<IngestWarning>,
}

impl BatchReport {
    /// Human-readable summary of everything that went wrong, `None` when
    /// the batch was fully clean
    pub fn summary(&self) -> Option<String> {
        if self.rejected.is_empty() && self.warnings.is_empty() {
            return None;
        }
        let mut summary = String::new();
        if !self.rejected.is_empty() {
            let _ = write!(&mut summary, "{} file(s) were not added:", self.rejected.len());
            for rejected in &self.rejected {
                let _ = write!(&mut summary, "\n  file {}: {}", rejected.index + 1, rejected.reason);
            }
        }
        if !self.warnings.is_empty() {
            if !summary.is_empty() {
                summary.push('\n');
            }
            let _ = write!(
                &mut summary,
                "{} file(s) were added without a transport encoding:",
                self.warnings.len()
            );
            for warning in &self.warnings {
                let _ = write!(&mut summary, "\n  {}", warning);
            }
        }
        Some(summary)
    }
}

/// The media ingestion pipeline
///
/// Owns the item store and the acceptance sequence counter. All
/// acquisition flows funnel through [`IngestPipeline::ingest`]; tag edits
/// and removals go straight to the store via [`IngestPipeline::store_mut`].
pub struct IngestPipeline {
    policy: IngestPolicy,
    store: ItemStore,
    next_seq: u64,
}

impl Default for IngestPipeline {
    fn default() -> Self {
        Self::new(IngestPolicy::default())
    }
}

impl IngestPipeline {
    /// Create a pipeline with the given policy table
    pub fn new(policy: IngestPolicy) -> Self {
        IngestPipeline {
            policy,
            store: ItemStore::new(),
            next_seq: 0,
        }
    }

    /// The policy table in force
    pub fn policy(&self) -> &IngestPolicy {
        &self.policy
    }

    /// Read access to the Collection
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Mutable access for tag edits, title edits and removals
    pub fn store_mut(&mut self) -> &mut ItemStore {
        &mut self.store
    }

    /// Register the consumer callback fired on every Collection change
    pub fn set_on_change(&mut self, callback: ChangeCallback) {
        self.store.set_on_change(callback);
    }

    /// Ingest files handed over by the device file chooser
    pub async fn ingest_picker(
        &mut self,
        files: Vec<PickedFile>,
        kind: MediaKind,
        context: &AcquisitionContext,
        batch_title: Option<&str>,
    ) -> BatchReport {
        let records = picker::acquire_from_picker(files, kind, context);
        self.ingest(records, kind, batch_title).await
    }

    /// Capture one photo from a live camera session and ingest it
    ///
    /// Device errors are fatal to this attempt only; the pipeline and its
    /// Collection remain usable.
    pub async fn capture_photo(
        &mut self,
        capability: &dyn CameraCapability,
        context: AcquisitionContext,
        batch_title: Option<&str>,
    ) -> Result<BatchReport, CaptureError> {
        let mut session = backends::open_session(capability, context)?;
        let record = session.capture()?;
        Ok(self.ingest(vec![record], MediaKind::Photo, batch_title).await)
    }

    /// Validate, encode and insert one acquisition batch
    ///
    /// Photos encode concurrently, videos strictly one-after-another to
    /// bound peak memory. Every finished item is inserted immediately and
    /// lands at its acceptance-order position, so consumers get
    /// progressive updates in a stable order.
    pub async fn ingest(
        &mut self,
        records: Vec<RawAcquisition>,
        kind: MediaKind,
        batch_title: Option<&str>,
    ) -> BatchReport {
        let policy = self.policy.for_kind(kind).clone();
        let outcome = validator::validate(records, kind, &policy);

        if let Some(summary) = outcome.summary() {
            warn!("{}", summary);
        }

        let mut report = BatchReport {
            rejected: outcome.rejected,
            ..BatchReport::default()
        };

        // Acceptance order is fixed here, before any encoding starts
        let accepted: Vec<(u64, _)> = outcome
            .accepted
            .into_iter()
            .map(|record| {
                let seq = self.next_seq;
                self.next_seq += 1;
                (seq, record)
            })
            .collect();
        let accepted_count = accepted.len();
        let mut inserted: Vec<(u64, MediaId)> = Vec::with_capacity(accepted_count);

        match kind {
            MediaKind::Photo => {
                let mut encodes: FuturesUnordered<_> = accepted
                    .into_iter()
                    .map(|(seq, record)| {
                        let policy = &policy;
                        async move {
                            let (item, warning) =
                                encoder::encode_record(record, seq, policy, batch_title).await;
                            (seq, item, warning)
                        }
                    })
                    .collect();
                while let Some((seq, item, warning)) = encodes.next().await {
                    inserted.push((seq, item.id));
                    self.store.insert(item);
                    report.warnings.extend(warning);
                }
            }
            MediaKind::Video => {
                for (seq, record) in accepted {
                    let (item, warning) =
                        encoder::encode_record(record, seq, &policy, batch_title).await;
                    inserted.push((seq, item.id));
                    self.store.insert(item);
                    report.warnings.extend(warning);
                }
            }
        }

        // Report ids in acceptance order even when encodes finished out of it
        inserted.sort_by_key(|(seq, _)| *seq);
        report.inserted = inserted.into_iter().map(|(_, id)| id).collect();

        info!(
            ?kind,
            accepted = accepted_count,
            rejected = report.rejected.len(),
            warnings = report.warnings.len(),
            "Batch ingested"
        );
        report
    }

    /// Teardown: release every preview and empty the Collection
    pub fn teardown(&mut self) {
        self.store.clear();
    }
}
