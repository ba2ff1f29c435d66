// SPDX-License-Identifier: MPL-2.0

//! Payload format detection
//!
//! Sniffs magic bytes to classify payloads into a MIME type and family.
//! Declared kinds are never trusted: the validator compares the declared
//! kind against what the bytes actually are.

use infer::MatcherType;
use tracing::debug;

/// MIME family a payload belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFamily {
    /// image/* payloads
    Image,
    /// video/* payloads
    Video,
    /// Anything else recognisable (audio, archives, documents, ...)
    Other,
}

/// Result of sniffing a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedFormat {
    /// Sniffed MIME type, e.g. "image/jpeg" or "video/mp4"
    pub mime: &'static str,
    /// MIME family the payload belongs to
    pub family: MediaFamily,
}

/// Sniff a payload's format from its magic bytes
///
/// Returns `None` when the payload matches no known signature.
pub fn detect(payload: &[u8]) -> Option<DetectedFormat> {
    let kind = infer::get(payload)?;
    let family = match kind.matcher_type() {
        MatcherType::Image => MediaFamily::Image,
        MatcherType::Video => MediaFamily::Video,
        _ => MediaFamily::Other,
    };
    debug!(mime = kind.mime_type(), ?family, "Payload format detected");
    Some(DetectedFormat {
        mime: kind.mime_type(),
        family,
    })
}
