//! Triage classification.
//!
//! Maps the symptom text and self-reported severity onto a severity tier, a
//! canned recommendation, and a fixed confidence value. Evaluated as a
//! priority chain: emergency wording wins over everything, then the severity
//! bands in descending order. Independent of the risk scorer.

use serde::Serialize;
use utoipa::ToSchema;

use crate::constants::{
    EMERGENCY_RECOMMENDATION, EMERGENCY_TERMS, MILD_RECOMMENDATION, MODERATE_RECOMMENDATION,
    SEVERE_RECOMMENDATION,
};
use crate::record::IntakeRecord;

/// Triage output category, independent of the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Mild,
    Moderate,
    Severe,
    Emergency,
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Emergency => "emergency",
        };
        write!(f, "{label}")
    }
}

/// The classifier's output for one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriageDecision {
    pub tier: SeverityTier,
    pub recommendation: &'static str,
    /// Fixed per-tier constant, not computed from the input.
    pub confidence: f64,
}

/// Classifies a validated record.
///
/// First matching rule wins; emergency wording in the symptom text overrides
/// any self-reported severity.
pub fn classify(record: &IntakeRecord) -> TriageDecision {
    let lowered = record.symptoms().to_lowercase();
    if let Some(term) = EMERGENCY_TERMS.iter().find(|kw| lowered.contains(*kw)) {
        tracing::warn!(term, "emergency wording in symptom description");
        return TriageDecision {
            tier: SeverityTier::Emergency,
            recommendation: EMERGENCY_RECOMMENDATION,
            confidence: 0.95,
        };
    }

    match record.severity().map(|s| s.get()) {
        Some(s) if s >= 8 => TriageDecision {
            tier: SeverityTier::Severe,
            recommendation: SEVERE_RECOMMENDATION,
            confidence: 0.80,
        },
        Some(s) if s >= 5 => TriageDecision {
            tier: SeverityTier::Moderate,
            recommendation: MODERATE_RECOMMENDATION,
            confidence: 0.70,
        },
        _ => TriageDecision {
            tier: SeverityTier::Mild,
            recommendation: MILD_RECOMMENDATION,
            confidence: 0.65,
        },
    }
}
