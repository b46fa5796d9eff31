//! # Asclepius Core
//!
//! Core triage logic for the Asclepius symptom-intake service:
//! - Vital-signs and symptom-record validation with an ordered rule chain
//! - Deterministic risk scoring and urgency/category derivation
//! - Keyword-driven triage classification with canned recommendations
//! - In-memory, mutex-guarded diagnosis history
//!
//! **No API concerns**: HTTP routing, request deserialization failures, and
//! error-to-response translation belong in `api-rest`.

pub mod constants;
pub mod error;
pub mod history;
pub mod record;
pub mod risk;
pub mod triage;
pub mod validation;
pub mod vitals;

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

pub use error::{IntakeError, IntakeResult, VitalsError};
pub use history::{HistoryEntry, HistoryLog};
pub use record::{IntakeRecord, SymptomDuration, SymptomInput};
pub use risk::{PatientCategory, RiskAssessment, UrgencyLevel};
pub use triage::{SeverityTier, TriageDecision};
pub use vitals::BloodPressure;

/// The complete diagnosis returned for one accepted intake record.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(example = json!({
    "severity_tier": "moderate",
    "recommendation": "Consider seeing a doctor within 24-48 hours",
    "confidence": 0.70,
    "risk_score": 34,
    "urgency_level": "MODERATE",
    "patient_category": "ADULT",
    "analyzed_symptoms": "persistent headache and dizziness"
}))]
pub struct DiagnosisResponse {
    /// Triage output category: mild, moderate, severe, or emergency.
    pub severity_tier: SeverityTier,
    /// What the caller should do.
    pub recommendation: String,
    /// Fixed per-tier confidence in 0..=1.
    pub confidence: f64,
    /// Heuristic severity indicator in 0..=100.
    pub risk_score: u8,
    /// Urgency label derived from the risk score.
    pub urgency_level: UrgencyLevel,
    /// Age-band label for the patient.
    pub patient_category: PatientCategory,
    /// The normalized symptom description that was analyzed.
    pub analyzed_symptoms: String,
}

/// Pure triage operations plus the shared diagnosis history - no API
/// concerns.
///
/// One instance is created at startup and cloned into request handlers; all
/// clones share the same history log.
#[derive(Clone, Default)]
pub struct TriageService {
    history: Arc<HistoryLog>,
}

impl TriageService {
    /// Creates a new service with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the full pipeline for one candidate record: validate, score,
    /// classify, append to history, and build the response.
    ///
    /// Scoring and classification are total over validated records, so the
    /// only failure mode is a validation rejection.
    ///
    /// # Errors
    ///
    /// Returns the [`IntakeError`] for the first validation rule the record
    /// violates.
    pub fn diagnose(&self, input: SymptomInput) -> IntakeResult<DiagnosisResponse> {
        let record = validation::validate(input)?;
        let assessment = risk::assess(&record);
        let decision = triage::classify(&record);

        let entry = self.history.append(
            record.symptoms(),
            decision.tier,
            decision.recommendation,
            assessment.risk_score,
        );
        tracing::info!(
            id = entry.id,
            tier = %decision.tier,
            risk_score = assessment.risk_score,
            "diagnosis recorded"
        );

        Ok(DiagnosisResponse {
            severity_tier: decision.tier,
            recommendation: decision.recommendation.to_owned(),
            confidence: decision.confidence,
            risk_score: assessment.risk_score,
            urgency_level: assessment.urgency,
            patient_category: assessment.category,
            analyzed_symptoms: record.symptoms().to_owned(),
        })
    }

    /// All recorded diagnoses in insertion order.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.list_all()
    }

    /// Discards the recorded history and resets the id sequence.
    pub fn clear_history(&self) {
        self.history.clear();
        tracing::info!("diagnosis history cleared");
    }
}
