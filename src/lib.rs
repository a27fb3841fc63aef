// SPDX-License-Identifier: MPL-2.0
//! `emotion_lens` is a placeholder emotion-recognition demo built with the
//! Iced GUI framework.
//!
//! It previews the local camera, offers an audio toggle that only leaves a
//! diagnostic trail, and "detects" emotions by drawing a random label. The
//! interesting part is the camera lifecycle: every acquired track is stopped
//! exactly once, whatever order the user clicks in.

pub mod app;
pub mod application;
pub mod audio;
pub mod camera;
pub mod diagnostics;
pub mod domain;
pub mod emotion;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod infrastructure;
pub mod ui;
