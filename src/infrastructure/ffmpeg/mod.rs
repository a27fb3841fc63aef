// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`MediaDevices`] port.
//!
//! Cameras are opened through libavdevice capture formats:
//!
//! | Platform | Input format    | Default device          |
//! |----------|-----------------|-------------------------|
//! | Linux    | `v4l2`          | `/dev/video0`           |
//! | macOS    | `avfoundation`  | `0`                     |
//! | Windows  | `dshow`         | `video=Integrated Camera` |
//!
//! Both can be overridden through [`VideoConstraints`].
//!
//! [`MediaDevices`]: crate::application::port::MediaDevices

mod capture;

use std::sync::OnceLock;

use crate::application::port::{MediaDevices, MediaStream};
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::camera::VideoConstraints;
use crate::error::CameraError;

static FFMPEG_INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Initializes `FFmpeg` and its capture devices once per process.
///
/// # Errors
///
/// Returns [`CameraError::Unsupported`] when the libraries fail to
/// initialize.
pub fn init_ffmpeg() -> Result<(), CameraError> {
    FFMPEG_INIT
        .get_or_init(|| {
            ffmpeg_next::init().map_err(|e| format!("FFmpeg initialization failed: {e}"))?;
            ffmpeg_next::device::register_all();
            // SAFETY: av_log_set_level only stores the global log threshold.
            unsafe {
                ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
            }
            Ok(())
        })
        .clone()
        .map_err(CameraError::Unsupported)
}

#[cfg(target_os = "linux")]
const PLATFORM_DEFAULTS: (&str, &str) = ("v4l2", "/dev/video0");
#[cfg(target_os = "macos")]
const PLATFORM_DEFAULTS: (&str, &str) = ("avfoundation", "0");
#[cfg(target_os = "windows")]
const PLATFORM_DEFAULTS: (&str, &str) = ("dshow", "video=Integrated Camera");
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const PLATFORM_DEFAULTS: (&str, &str) = ("v4l2", "/dev/video0");

/// Default frame rate requested when none is configured. `avfoundation`
/// refuses to open without one.
const DEFAULT_FRAMERATE: u32 = 30;

/// Camera access through `FFmpeg` capture devices.
#[derive(Debug, Clone, Default)]
pub struct FfmpegCamera {
    diagnostics: Option<DiagnosticsHandle>,
}

impl FfmpegCamera {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture workers report backend trouble through `handle`.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }
}

impl MediaDevices for FfmpegCamera {
    fn open_video(&self, constraints: &VideoConstraints) -> Result<MediaStream, CameraError> {
        init_ffmpeg()?;

        let (default_format, default_device) = PLATFORM_DEFAULTS;
        let format_name = constraints
            .input_format
            .clone()
            .unwrap_or_else(|| default_format.to_string());
        let device = constraints
            .device
            .clone()
            .unwrap_or_else(|| default_device.to_string());

        let mut options = Vec::new();
        if let Some(size) = constraints.video_size() {
            options.push(("video_size", size));
        }
        let framerate = constraints.framerate.unwrap_or(DEFAULT_FRAMERATE);
        options.push(("framerate", framerate.to_string()));

        tracing::info!(format = %format_name, %device, "opening camera");
        capture::start(capture::CaptureSetup {
            format_name,
            device,
            options,
            diagnostics: self.diagnostics.clone(),
        })
    }
}

/// Looks up a registered capture input format by name.
fn find_input_format(name: &str) -> Option<ffmpeg_next::format::Input> {
    ffmpeg_next::device::input::video().find(|format| format.name() == name)
}
