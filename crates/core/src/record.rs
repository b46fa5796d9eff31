//! Intake record types.
//!
//! [`SymptomInput`] is the candidate record exactly as submitted by the
//! caller; scalar ranges (severity, heart rate, temperature) are already
//! enforced by the `asclepius-types` newtypes at the serde boundary.
//! [`IntakeRecord`] is the validated unit handed to the risk scorer and the
//! triage classifier; it can only be produced by
//! [`crate::validation::validate`].

use asclepius_types::{HeartRate, Severity, TemperatureF};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::vitals::BloodPressure;

/// How long the symptoms have lasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SymptomDuration {
    #[serde(rename = "hours")]
    Hours,
    #[serde(rename = "1 day")]
    OneDay,
    #[serde(rename = "2-3 days")]
    TwoToThreeDays,
    #[serde(rename = "week+")]
    WeekPlus,
}

impl SymptomDuration {
    /// The wire spelling of this duration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::OneDay => "1 day",
            Self::TwoToThreeDays => "2-3 days",
            Self::WeekPlus => "week+",
        }
    }
}

/// A candidate intake record as submitted by the caller.
///
/// Deserialization enforces the declared scalar ranges and the duration
/// enumeration; everything else is checked by the symptom-record validator.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({
    "symptoms": "I have a persistent headache and feel dizzy when standing up",
    "duration": "2-3 days",
    "severity": 6,
    "age": 35
}))]
pub struct SymptomInput {
    /// Description of symptoms (minimum 20 characters).
    pub symptoms: String,
    /// How long symptoms have lasted.
    #[serde(default)]
    pub duration: Option<SymptomDuration>,
    /// Severity on a 1-10 scale.
    #[serde(default)]
    pub severity: Option<Severity>,
    /// Patient age in years (1-120).
    #[serde(default)]
    pub age: Option<u8>,
    /// Heart rate in beats per minute (40-200).
    #[serde(default)]
    pub heart_rate: Option<HeartRate>,
    /// Blood pressure as "systolic/diastolic", e.g. "120/80".
    #[serde(default)]
    pub blood_pressure: Option<String>,
    /// Body temperature in degrees Fahrenheit (95.0-108.0).
    #[serde(default)]
    pub temperature: Option<TemperatureF>,
}

/// A validated intake record.
///
/// Fields are immutable once constructed; the symptom text has been trimmed
/// and every plausibility rule has passed. Derived values (risk score,
/// urgency, category) are computed by separate pure functions, not stored
/// here.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeRecord {
    pub(crate) symptoms: String,
    pub(crate) duration: Option<SymptomDuration>,
    pub(crate) severity: Option<Severity>,
    pub(crate) age: Option<u8>,
    pub(crate) heart_rate: Option<HeartRate>,
    pub(crate) blood_pressure: Option<BloodPressure>,
    pub(crate) temperature: Option<TemperatureF>,
}

impl IntakeRecord {
    /// The trimmed symptom description.
    pub fn symptoms(&self) -> &str {
        &self.symptoms
    }

    pub fn duration(&self) -> Option<SymptomDuration> {
        self.duration
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn age(&self) -> Option<u8> {
        self.age
    }

    pub fn heart_rate(&self) -> Option<HeartRate> {
        self.heart_rate
    }

    pub fn blood_pressure(&self) -> Option<BloodPressure> {
        self.blood_pressure
    }

    pub fn temperature(&self) -> Option<TemperatureF> {
        self.temperature
    }
}
