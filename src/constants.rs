// SPDX-License-Identifier: GPL-3.0-only

//! Pipeline-wide constants
//!
//! All size, count and time limits live here so the validator and encoder
//! consume one set of numbers instead of per-branch thresholds.

use std::time::Duration;

/// Hard per-file ceiling for video payloads in bytes (50 MiB).
///
/// Videos above this are rejected outright at validation time.
pub const VIDEO_MAX_BYTES: u64 = 50 * 1024 * 1024;

/// "Large video" threshold in bytes (10 MiB).
///
/// Videos between this and [`VIDEO_MAX_BYTES`] are accepted but skip the
/// text encoding step; downstream transport uses the raw binary instead.
pub const VIDEO_LARGE_BYTES: u64 = 10 * 1024 * 1024;

/// Maximum number of video records accepted from a single acquisition batch.
pub const VIDEO_BATCH_LIMIT: usize = 3;

/// Deadline for one payload's text encoding attempt.
///
/// An encode that misses the deadline is treated as a completed failure;
/// the item is kept without its transportable payload.
pub const ENCODE_TIMEOUT: Duration = Duration::from_secs(30);

/// Video container formats accepted by the validator (by sniffed MIME type).
pub const VIDEO_FORMAT_ALLOWLIST: [&str; 3] = ["video/mp4", "video/webm", "video/quicktime"];

/// URI scheme for preview tokens handed to the external consumer.
pub const PREVIEW_SCHEME: &str = "preview";
