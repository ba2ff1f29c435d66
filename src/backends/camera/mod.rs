// SPDX-License-Identifier: MPL-2.0

//! Camera capture backend
//!
//! Device access goes through the [`CameraCapability`] trait rather than
//! ambient global state, so the UI layer injects the real device handle
//! and tests substitute a fake.
//!
//! ```text
//! ┌─────────────────────┐
//! │   UI Layer (form)   │
//! └──────────┬──────────┘
//!            │ open_session(capability, context)
//!            ▼
//! ┌─────────────────────┐
//! │    CameraSession    │  ← Scoped stream ownership, stop on all exits
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │  CameraCapability   │  ← Injected device handle (real or fake)
//! └─────────────────────┘
//! ```

pub mod session;

pub use session::CameraSession;

use crate::errors::CaptureError;
use crate::media::AcquisitionContext;
use tracing::{debug, info};

/// Which way a camera faces, when the platform reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFacing {
    /// User-facing (selfie) camera
    Front,
    /// Outward-facing camera, preferred for listing photography
    Rear,
    /// Facing not reported
    #[default]
    Unknown,
}

/// One enumerable camera device
#[derive(Debug, Clone)]
pub struct CameraDescriptor {
    /// Device name for logging and UI
    pub name: String,
    /// Reported facing
    pub facing: CameraFacing,
}

/// An open frame stream on one device
///
/// Implementations must make `stop` idempotent; the session calls it on
/// capture, on cancel and on drop.
pub trait CameraStream: Send {
    /// Take one freeze-frame from the live stream
    fn grab_frame(&mut self) -> Result<Vec<u8>, CaptureError>;

    /// Stop all tracks and release the device
    fn stop(&mut self);
}

/// Injected camera device handle
pub trait CameraCapability: Send + Sync {
    /// Enumerate available camera devices
    fn enumerate(&self) -> Vec<CameraDescriptor>;

    /// Open a live stream on the given device
    fn open(&self, descriptor: &CameraDescriptor) -> Result<Box<dyn CameraStream>, CaptureError>;
}

/// Open a live capture session, preferring a rear-facing device
///
/// Fails with [`CaptureError::DeviceUnavailable`] when no device is
/// present or none can be opened (e.g. permission denied). The returned
/// session owns the stream and guarantees it is stopped on capture, on
/// cancel and on drop.
pub fn open_session(
    capability: &dyn CameraCapability,
    context: AcquisitionContext,
) -> Result<CameraSession, CaptureError> {
    let devices = capability.enumerate();
    if devices.is_empty() {
        return Err(CaptureError::DeviceUnavailable(
            "no camera devices found".to_string(),
        ));
    }

    let device = devices
        .iter()
        .find(|d| d.facing == CameraFacing::Rear)
        .unwrap_or(&devices[0]);
    debug!(device = %device.name, facing = ?device.facing, "Opening camera device");

    let stream = capability
        .open(device)
        .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?;

    info!(device = %device.name, "Camera session opened");
    Ok(CameraSession::new(stream, device.name.clone(), context))
}
