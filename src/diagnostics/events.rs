// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events are tagged enums so the exported JSON stays self-describing:
//! `{"type":"app_state","state":{"state":"audio_capture_started"}}`.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Application state changes worth keeping in the diagnostic trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// The audio toggle was switched on. No audio is actually captured.
    AudioCaptureStarted,

    /// The audio toggle was switched off.
    AudioCaptureStopped,

    /// A camera stream was bound to the video surface.
    CameraStarted {
        /// Acquisition attempt the stream belongs to.
        request: u64,
        /// Number of tracks in the stream.
        tracks: usize,
    },

    /// The active camera stream was released.
    CameraStopped {
        request: u64,
        /// Number of tracks stopped by the release.
        tracks: usize,
    },

    /// A completion arrived for an acquisition nobody waits for anymore.
    StaleCameraStreamDiscarded {
        request: u64,
        /// Tracks stopped because the stream arrived late.
        tracks: usize,
    },

    /// The emotion stub replaced the displayed label.
    EmotionDetected {
        /// English name of the new label.
        label: String,
    },
}

/// Categories of non-critical warnings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The settings file could not be read or parsed.
    ConfigurationIssue,
    /// The capture backend reported something unexpected but kept running.
    CaptureBackend,
    Other,
}

/// Categories of errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Opening the camera failed.
    CameraAcquisition,
    /// The camera stopped delivering frames after it was opened.
    CameraDeviceLost,
    Other,
}

/// A warning with its category and sanitized message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error with its category and sanitized message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    /// Backend-specific error code when one is known (e.g. the i18n key of
    /// a classified camera error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            error_code: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }
}

/// A single diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic).
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current instant.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and payload of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    AppState { state: AppStateEvent },
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}
