// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`camera`]: Video-only capture devices and their tracks
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Methods return `Result` with domain error types
//! - No `async fn` - callers wrap blocking calls in Iced's `Task`

pub mod camera;

pub use camera::{
    AcquiredStream, CaptureEvent, CaptureReceiver, CaptureSender, MediaDevices, MediaStream,
    MediaTrack,
};
