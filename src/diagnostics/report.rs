// SPDX-License-Identifier: MPL-2.0
//! JSON diagnostic report layout.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Report header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339).
    pub generated_at: String,
    pub app_version: String,
    /// When the collector was created (RFC 3339).
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
    /// Events that no longer fit in the buffer and were dropped.
    pub evicted_count: u64,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
        evicted_count: u64,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
            evicted_count,
        }
    }
}

/// Coarse platform description. Contains nothing user-identifying.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemInfo {
    pub os: String,
    pub cpu_arch: String,
    pub cpu_cores: usize,
}

impl SystemInfo {
    #[must_use]
    pub fn collect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            cpu_arch: std::env::consts::ARCH.to_string(),
            cpu_cores: std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

/// An event with its timestamp made relative to the collection start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // ms since start fits in u64
    pub fn new(event_timestamp: Instant, collection_start: Instant, kind: DiagnosticEventKind) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}

/// Per-type event counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub event_counts: BTreeMap<String, usize>,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        let mut event_counts = BTreeMap::new();
        for event in events {
            let key = match &event.kind {
                DiagnosticEventKind::AppState { .. } => "app_state",
                DiagnosticEventKind::Warning { .. } => "warning",
                DiagnosticEventKind::Error { .. } => "error",
            };
            *event_counts.entry(key.to_string()).or_insert(0) += 1;
        }
        Self { event_counts }
    }
}

/// A complete exportable report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub system_info: SystemInfo,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, system_info: SystemInfo, events: Vec<SerializableEvent>) -> Self {
        Self {
            metadata,
            system_info,
            summary: ReportSummary::from_events(&events),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{AppStateEvent, ErrorEvent, ErrorType};
    use std::time::Duration;

    #[test]
    fn event_timestamp_is_relative_to_start() {
        let start = Instant::now();
        let event = SerializableEvent::new(
            start + Duration::from_millis(42),
            start,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::AudioCaptureStopped,
            },
        );
        assert_eq!(event.timestamp_ms, 42);
    }

    #[test]
    fn event_before_start_saturates_to_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let event = SerializableEvent::new(
            Instant::now(),
            start,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::AudioCaptureStarted,
            },
        );
        assert_eq!(event.timestamp_ms, 0);
    }

    #[test]
    fn summary_counts_events_per_type() {
        let start = Instant::now();
        let events = vec![
            SerializableEvent::new(
                start,
                start,
                DiagnosticEventKind::AppState {
                    state: AppStateEvent::AudioCaptureStarted,
                },
            ),
            SerializableEvent::new(
                start,
                start,
                DiagnosticEventKind::Error {
                    event: ErrorEvent::new(ErrorType::CameraAcquisition, "denied"),
                },
            ),
            SerializableEvent::new(
                start,
                start,
                DiagnosticEventKind::AppState {
                    state: AppStateEvent::AudioCaptureStopped,
                },
            ),
        ];
        let summary = ReportSummary::from_events(&events);
        assert_eq!(summary.event_counts.get("app_state"), Some(&2));
        assert_eq!(summary.event_counts.get("error"), Some(&1));
        assert_eq!(summary.event_counts.get("warning"), None);
    }

    #[test]
    fn system_info_reports_at_least_one_core() {
        assert!(SystemInfo::collect().cpu_cores >= 1);
    }
}
