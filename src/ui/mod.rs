// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.
//!
//! Components follow the Elm-style "state down, messages up" pattern: they
//! render from borrowed state and are generic over the caller's message type.
//!
//! - [`video_surface`] - Camera preview bound to one capture request
//! - [`emotion_panel`] - "Detected Emotion" readout
//! - [`notifications`] - Toasts for camera and configuration problems
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, sizing
//! - [`theming`] - Light/Dark/System theme mode
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod emotion_panel;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod video_surface;
