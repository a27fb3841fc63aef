// SPDX-License-Identifier: MPL-2.0
//! Central store for diagnostic events.
//!
//! The UI thread owns a [`DiagnosticsCollector`] and logs into it directly.
//! Other threads (capture workers) get a cloneable [`DiagnosticsHandle`]
//! that feeds the collector through a bounded channel; the collector drains
//! it on [`process_pending`].
//!
//! Every stored event is also emitted through `tracing`, so a developer
//! running with `RUST_LOG` sees the same trail the report contains.
//!
//! [`process_pending`]: DiagnosticsCollector::process_pending

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    sanitize_message, AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent,
    DiagnosticEventKind, DiagnosticReport, ErrorEvent, ReportMetadata, SerializableEvent,
    SystemInfo, WarningEvent,
};

/// Pending events a handle may queue before further sends are dropped.
const CHANNEL_CAPACITY: usize = 100;

/// Sending side of the diagnostic channel.
///
/// Cheap to clone and `Send`. Sends never block: when the channel is full
/// the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    /// Queues a warning. The message is sanitized of file paths.
    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning {
            event: sanitize_warning(event),
        });
    }

    /// Queues an error. The message is sanitized of file paths.
    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error {
            event: sanitize_error(event),
        });
    }

    /// Queues an event and reports whether it was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` when the channel is saturated, or
    /// `TrySendError::Disconnected` once the collector is gone.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.try_log(kind);
    }
}

/// Memory-bounded diagnostic event store.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle feeding this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued handle event into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.store(event);
        }
    }

    pub fn log_state(&mut self, state: AppStateEvent) {
        self.store(DiagnosticEvent::new(DiagnosticEventKind::AppState { state }));
    }

    /// Records a warning. The message is sanitized of file paths.
    pub fn log_warning(&mut self, event: WarningEvent) {
        self.store(DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: sanitize_warning(event),
        }));
    }

    /// Records an error. The message is sanitized of file paths.
    pub fn log_error(&mut self, event: ErrorEvent) {
        self.store(DiagnosticEvent::new(DiagnosticEventKind::Error {
            event: sanitize_error(event),
        }));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Stored event kinds, oldest first.
    pub fn kinds(&self) -> impl Iterator<Item = &DiagnosticEventKind> {
        self.buffer.iter().map(|event| &event.kind)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn collection_duration(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Serializes the stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // ms since start fits in u64
    fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::new(event.timestamp, self.started_at, event.kind.clone()))
            .collect();
        let metadata = ReportMetadata::new(
            self.started_at_utc,
            self.started_at.elapsed().as_millis() as u64,
            events.len(),
            self.buffer.evicted(),
        );
        DiagnosticReport::new(metadata, SystemInfo::collect(), events)
    }

    fn store(&mut self, event: DiagnosticEvent) {
        mirror_to_tracing(&event.kind);
        self.buffer.push(event);
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}

fn sanitize_warning(event: WarningEvent) -> WarningEvent {
    WarningEvent {
        message: sanitize_message(&event.message),
        ..event
    }
}

fn sanitize_error(event: ErrorEvent) -> ErrorEvent {
    ErrorEvent {
        message: sanitize_message(&event.message),
        ..event
    }
}

fn mirror_to_tracing(kind: &DiagnosticEventKind) {
    match kind {
        DiagnosticEventKind::AppState { state } => {
            tracing::info!(target: "emotion_lens::diagnostics", ?state, "state change");
        }
        DiagnosticEventKind::Warning { event } => {
            tracing::warn!(
                target: "emotion_lens::diagnostics",
                kind = ?event.warning_type,
                "{}",
                event.message
            );
        }
        DiagnosticEventKind::Error { event } => {
            tracing::error!(
                target: "emotion_lens::diagnostics",
                kind = ?event.error_type,
                code = event.error_code.as_deref().unwrap_or("-"),
                "{}",
                event.message
            );
        }
    }
}
