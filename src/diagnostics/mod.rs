// SPDX-License-Identifier: MPL-2.0
//! Diagnostic trail of camera, audio and emotion activity.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: ring buffer bounded by a [`BufferCapacity`]
//! - [`DiagnosticsCollector`]: owns the buffer, exports JSON reports
//! - [`DiagnosticsHandle`]: cloneable sender for other threads
//!
//! # Privacy
//!
//! Warning and error messages go through [`sanitize_message`] before they
//! are stored, so exported reports never carry user file paths.

mod buffer;
mod collector;
mod events;
mod report;
mod sanitizer;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, WarningEvent,
    WarningType,
};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent, SystemInfo};
pub use sanitizer::sanitize_message;
