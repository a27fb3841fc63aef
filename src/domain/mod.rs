// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so the rules it encodes
//! stay easy to test in isolation.
//!
//! # Modules
//!
//! - [`camera`]: Capture session types ([`RequestId`](camera::RequestId),
//!   [`TrackId`](camera::TrackId), [`CameraFrame`](camera::CameraFrame),
//!   [`VideoConstraints`](camera::VideoConstraints))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`emotion`]: The fixed emotion label set ([`EmotionLabel`](emotion::EmotionLabel))

pub mod camera;
pub mod diagnostics;
pub mod emotion;
