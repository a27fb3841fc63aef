// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters for the ports in `application::port`.
//!
//! - [`ffmpeg`]: camera capture through `FFmpeg` devices (implements
//!   [`MediaDevices`])
//!
//! [`MediaDevices`]: crate::application::port::MediaDevices

pub mod ffmpeg;

pub use ffmpeg::FfmpegCamera;
