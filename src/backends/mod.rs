// SPDX-License-Identifier: MPL-2.0

//! Capture source adapter
//!
//! Wraps the two acquisition paths into one normalized record shape:
//!
//! - [`picker`]: device file selection (finite, already-enumerated payloads)
//! - [`camera`]: live camera freeze-frame capture behind an injected
//!   device-handle trait
//!
//! Both paths emit [`crate::media::RawAcquisition`] records carrying the
//! binary payload, the declared media kind and the target room/category
//! context; everything downstream is source-agnostic.

pub mod camera;
pub mod picker;

pub use camera::{
    CameraCapability, CameraDescriptor, CameraFacing, CameraSession, CameraStream, open_session,
};
pub use picker::acquire_from_picker;
