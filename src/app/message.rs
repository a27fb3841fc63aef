// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::{AcquiredStream, CaptureEvent};
use crate::domain::camera::RequestId;
use crate::error::CameraError;
use crate::ui::notifications::NotificationId;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleVideo,
    ToggleAudio,
    DetectEmotion,
    /// Result of the acquisition tagged `request`.
    CameraAcquired {
        request: RequestId,
        result: Result<AcquiredStream, CameraError>,
    },
    /// Frame or end-of-stream from the session tagged `request`.
    CameraEvent {
        request: RequestId,
        event: CaptureEvent,
    },
    DismissNotification(NotificationId),
    /// Periodic tick for toast auto-dismiss and draining diagnostics.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `EMOTION_LENS_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Fixed seed for the emotion stub. Overrides `[emotion] seed`.
    pub seed: Option<u64>,
}
