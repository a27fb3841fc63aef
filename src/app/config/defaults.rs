// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configurable settings.

// =============================================================================
// Camera
// =============================================================================

/// Requested capture width when none is configured.
pub const DEFAULT_CAMERA_WIDTH: u32 = 640;

/// Requested capture height when none is configured.
pub const DEFAULT_CAMERA_HEIGHT: u32 = 480;

/// Requested capture rate when none is configured.
pub const DEFAULT_CAMERA_FRAMERATE: u32 = 30;

/// Highest accepted frame rate. Larger values are clamped.
pub const MAX_CAMERA_FRAMERATE: u32 = 120;

/// Largest accepted frame side. Larger values are clamped.
pub const MAX_CAMERA_DIMENSION: u32 = 7680;

// =============================================================================
// Diagnostics
// =============================================================================

pub use crate::domain::diagnostics::buffer_capacity_bounds::{
    DEFAULT as DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX as MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN as MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

// =============================================================================
// Notifications
// =============================================================================

/// Seconds a non-error toast stays visible.
pub const TOAST_DURATION_SECS: u64 = 4;

/// Toasts shown at once; the rest wait in the queue.
pub const MAX_VISIBLE_TOASTS: usize = 3;
