//! In-memory diagnosis history.
//!
//! An explicit log object rather than ambient globals: the service owns one
//! and request handlers reach it through shared state. Entries are immutable
//! snapshots; the id counter and the append happen under a single lock so
//! interleaved requests can never observe or assign the same id. Nothing is
//! persisted across restarts.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::triage::SeverityTier;

/// An immutable snapshot of one completed diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HistoryEntry {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    /// The analyzed symptom description.
    pub symptoms: String,
    /// Triage tier assigned at diagnosis time.
    pub severity_tier: SeverityTier,
    /// Recommendation returned to the caller.
    pub recommendation: String,
    /// Risk score assigned at diagnosis time.
    pub risk_score: u8,
    /// When the diagnosis completed.
    pub timestamp: DateTime<Utc>,
}

#[derive(Default)]
struct LogState {
    entries: Vec<HistoryEntry>,
    counter: u64,
}

/// Append-only log of past diagnoses.
#[derive(Default)]
pub struct HistoryLog {
    state: Mutex<LogState>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry and returns it.
    ///
    /// The assigned id is one greater than the previous append's, starting at
    /// 1. Incrementing the counter and storing the entry happen under one
    /// guard, so ids are never shared between interleaved requests.
    pub fn append(
        &self,
        symptoms: &str,
        severity_tier: SeverityTier,
        recommendation: &str,
        risk_score: u8,
    ) -> HistoryEntry {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.counter += 1;
        let entry = HistoryEntry {
            id: state.counter,
            symptoms: symptoms.to_owned(),
            severity_tier,
            recommendation: recommendation.to_owned(),
            risk_score,
            timestamp: Utc::now(),
        };
        state.entries.push(entry.clone());
        entry
    }

    /// Returns all entries in insertion order.
    pub fn list_all(&self) -> Vec<HistoryEntry> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.entries.clone()
    }

    /// Discards all entries and resets the id sequence to 0.
    ///
    /// Idempotent: clearing an empty log succeeds.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.entries.clear();
        state.counter = 0;
    }
}
