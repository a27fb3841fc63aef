// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Camera(CameraError),
}

/// Specific failure reasons for camera acquisition.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// The platform or the user refused access to the camera.
    PermissionDenied,

    /// No capture device exists at the configured location.
    DeviceUnavailable,

    /// The device exists but another process holds it.
    DeviceBusy,

    /// The capture backend is missing or cannot handle the device format.
    Unsupported(String),

    /// The device stopped delivering frames after it was opened.
    DeviceLost(String),

    /// Generic error with raw message
    Other(String),
}

impl CameraError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CameraError::PermissionDenied => "camera-error-permission-denied",
            CameraError::DeviceUnavailable => "camera-error-device-unavailable",
            CameraError::DeviceBusy => "camera-error-device-busy",
            CameraError::Unsupported(_) => "camera-error-unsupported",
            CameraError::DeviceLost(_) => "camera-error-device-lost",
            CameraError::Other(_) => "camera-error-general",
        }
    }

    /// Attempts to categorize a raw backend error message.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("permission denied")
            || msg_lower.contains("operation not permitted")
            || msg_lower.contains("not authorized")
        {
            return CameraError::PermissionDenied;
        }

        if msg_lower.contains("busy") {
            return CameraError::DeviceBusy;
        }

        if msg_lower.contains("no such file")
            || msg_lower.contains("no such device")
            || msg_lower.contains("not found")
            || msg_lower.contains("no video stream")
            || msg_lower.contains("i/o error")
        {
            return CameraError::DeviceUnavailable;
        }

        if msg_lower.contains("unsupported")
            || msg_lower.contains("not supported")
            || msg_lower.contains("unknown input format")
            || msg_lower.contains("decoder")
        {
            return CameraError::Unsupported(msg.to_string());
        }

        CameraError::Other(msg.to_string())
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::PermissionDenied => write!(f, "Camera access was denied"),
            CameraError::DeviceUnavailable => write!(f, "No camera device available"),
            CameraError::DeviceBusy => write!(f, "Camera is in use by another application"),
            CameraError::Unsupported(msg) => write!(f, "Camera format not supported: {}", msg),
            CameraError::DeviceLost(msg) => write!(f, "Camera stopped responding: {}", msg),
            CameraError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Camera(e) => write!(f, "Camera Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CameraError> for Error {
    fn from(err: CameraError) -> Self {
        Error::Camera(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
