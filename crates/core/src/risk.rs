//! Risk scoring.
//!
//! A pure, total function over validated records: age, self-reported
//! severity, and vital-sign abnormality each contribute a fixed number of
//! points, the sum is capped at 100, and the capped score maps onto a
//! four-tier urgency label. The age-band patient category is derived here as
//! well since it shares the same input.

use serde::Serialize;
use utoipa::ToSchema;

use crate::record::IntakeRecord;

/// Urgency label derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl UrgencyLevel {
    /// Maps a risk score onto an urgency label.
    ///
    /// Thresholds are inclusive lower bounds, evaluated highest-first.
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Self::Critical,
            50..=69 => Self::High,
            30..=49 => Self::Moderate,
            _ => Self::Low,
        }
    }
}

/// Age-band label used for contextual reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PatientCategory {
    Unknown,
    Infant,
    Pediatric,
    Adolescent,
    Adult,
    Geriatric,
}

impl PatientCategory {
    /// Maps an optional age onto an age band. Bands are half-open and
    /// evaluated in ascending order; the first match wins.
    pub fn from_age(age: Option<u8>) -> Self {
        match age {
            None => Self::Unknown,
            Some(a) if a < 2 => Self::Infant,
            Some(a) if a < 12 => Self::Pediatric,
            Some(a) if a < 18 => Self::Adolescent,
            Some(a) if a < 65 => Self::Adult,
            Some(_) => Self::Geriatric,
        }
    }
}

/// The scorer's output for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    /// Heuristic severity indicator in 0..=100.
    pub risk_score: u8,
    /// Urgency label derived from the score.
    pub urgency: UrgencyLevel,
    /// Age-band label for the patient.
    pub category: PatientCategory,
}

/// Scores a validated record.
///
/// Deterministic and total: the same record always produces the same
/// assessment, and no valid record can fail to score.
pub fn assess(record: &IntakeRecord) -> RiskAssessment {
    let total = u32::from(age_points(record.age()))
        + u32::from(severity_points(record))
        + u32::from(vitals_points(record));
    let risk_score = total.min(100) as u8;

    RiskAssessment {
        risk_score,
        urgency: UrgencyLevel::from_score(risk_score),
        category: PatientCategory::from_age(record.age()),
    }
}

/// Age contribution, 0-30 points. The very young and the elderly score
/// highest; an unspecified age contributes nothing.
fn age_points(age: Option<u8>) -> u8 {
    match age {
        None => 0,
        Some(a) if a < 1 => 20,
        Some(a) if a < 5 => 15,
        Some(a) if a > 70 => 25,
        Some(a) if a > 60 => 15,
        Some(_) => 5,
    }
}

/// Severity contribution, 0-40 points.
fn severity_points(record: &IntakeRecord) -> u8 {
    record.severity().map_or(0, |s| s.get() * 4)
}

/// Vital-sign contribution, 0-30 points. Tachycardia/bradycardia and
/// fever/hypothermia are independent additive bonuses.
fn vitals_points(record: &IntakeRecord) -> u8 {
    let mut points = 0;
    if let Some(hr) = record.heart_rate() {
        if hr.get() > 100 || hr.get() < 60 {
            points += 15;
        }
    }
    if let Some(temp) = record.temperature() {
        if temp.get() > 100.4 || temp.get() < 97.0 {
            points += 15;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use asclepius_types::{HeartRate, Severity, TemperatureF};

    fn record() -> IntakeRecord {
        IntakeRecord {
            symptoms: "persistent headache and dizziness all week".to_owned(),
            duration: None,
            severity: None,
            age: None,
            heart_rate: None,
            blood_pressure: None,
            temperature: None,
        }
    }

    #[test]
    fn test_empty_record_scores_zero_and_low() {
        let assessment = assess(&record());
        assert_eq!(assessment.risk_score, 0);
        assert_eq!(assessment.urgency, UrgencyLevel::Low);
        assert_eq!(assessment.category, PatientCategory::Unknown);
    }

    #[test]
    fn test_age_bands() {
        assert_eq!(age_points(None), 0);
        assert_eq!(age_points(Some(1)), 15);
        assert_eq!(age_points(Some(4)), 15);
        assert_eq!(age_points(Some(5)), 5);
        assert_eq!(age_points(Some(35)), 5);
        assert_eq!(age_points(Some(61)), 15);
        assert_eq!(age_points(Some(70)), 15);
        assert_eq!(age_points(Some(71)), 25);
        assert_eq!(age_points(Some(120)), 25);
    }

    #[test]
    fn test_severity_scales_linearly() {
        let mut r = record();
        r.severity = Some(Severity::new(6).unwrap());
        assert_eq!(assess(&r).risk_score, 24);

        r.severity = Some(Severity::new(10).unwrap());
        assert_eq!(assess(&r).risk_score, 40);
    }

    #[test]
    fn test_vitals_bonuses_are_additive() {
        let mut r = record();
        r.heart_rate = Some(HeartRate::new(120).unwrap());
        assert_eq!(assess(&r).risk_score, 15);

        r.temperature = Some(TemperatureF::new(101.5).unwrap());
        assert_eq!(assess(&r).risk_score, 30);
    }

    #[test]
    fn test_normal_vitals_score_nothing() {
        let mut r = record();
        r.heart_rate = Some(HeartRate::new(72).unwrap());
        r.temperature = Some(TemperatureF::new(98.6).unwrap());
        assert_eq!(assess(&r).risk_score, 0);
    }

    #[test]
    fn test_bradycardia_and_hypothermia_also_score() {
        let mut r = record();
        r.heart_rate = Some(HeartRate::new(50).unwrap());
        r.temperature = Some(TemperatureF::new(96.0).unwrap());
        assert_eq!(assess(&r).risk_score, 30);
    }

    #[test]
    fn test_worst_case_stays_within_bounds() {
        let mut r = record();
        r.age = Some(80);
        r.severity = Some(Severity::new(10).unwrap());
        r.heart_rate = Some(HeartRate::new(180).unwrap());
        r.temperature = Some(TemperatureF::new(104.0).unwrap());
        let assessment = assess(&r);
        assert_eq!(assessment.risk_score, 95);
        assert!(assessment.risk_score <= 100);
        assert_eq!(assessment.urgency, UrgencyLevel::Critical);
        assert_eq!(assessment.category, PatientCategory::Geriatric);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let mut r = record();
        r.age = Some(67);
        r.severity = Some(Severity::new(7).unwrap());
        r.heart_rate = Some(HeartRate::new(110).unwrap());
        assert_eq!(assess(&r), assess(&r));
    }

    #[test]
    fn test_urgency_thresholds() {
        assert_eq!(UrgencyLevel::from_score(0), UrgencyLevel::Low);
        assert_eq!(UrgencyLevel::from_score(29), UrgencyLevel::Low);
        assert_eq!(UrgencyLevel::from_score(30), UrgencyLevel::Moderate);
        assert_eq!(UrgencyLevel::from_score(49), UrgencyLevel::Moderate);
        assert_eq!(UrgencyLevel::from_score(50), UrgencyLevel::High);
        assert_eq!(UrgencyLevel::from_score(69), UrgencyLevel::High);
        assert_eq!(UrgencyLevel::from_score(70), UrgencyLevel::Critical);
        assert_eq!(UrgencyLevel::from_score(100), UrgencyLevel::Critical);
    }

    #[test]
    fn test_urgency_is_monotone_in_score() {
        let mut previous = UrgencyLevel::Low;
        for score in 0..=100u8 {
            let level = UrgencyLevel::from_score(score);
            assert!(level >= previous, "urgency regressed at score {score}");
            previous = level;
        }
    }

    #[test]
    fn test_patient_category_bands() {
        assert_eq!(PatientCategory::from_age(None), PatientCategory::Unknown);
        assert_eq!(PatientCategory::from_age(Some(1)), PatientCategory::Infant);
        assert_eq!(PatientCategory::from_age(Some(2)), PatientCategory::Pediatric);
        assert_eq!(PatientCategory::from_age(Some(11)), PatientCategory::Pediatric);
        assert_eq!(PatientCategory::from_age(Some(12)), PatientCategory::Adolescent);
        assert_eq!(PatientCategory::from_age(Some(17)), PatientCategory::Adolescent);
        assert_eq!(PatientCategory::from_age(Some(18)), PatientCategory::Adult);
        assert_eq!(PatientCategory::from_age(Some(64)), PatientCategory::Adult);
        assert_eq!(PatientCategory::from_age(Some(65)), PatientCategory::Geriatric);
        assert_eq!(PatientCategory::from_age(Some(120)), PatientCategory::Geriatric);
    }

    #[test]
    fn test_wire_spellings() {
        assert_eq!(
            serde_json::to_string(&UrgencyLevel::Critical).unwrap(),
            "\"CRITICAL\""
        );
        assert_eq!(
            serde_json::to_string(&PatientCategory::Geriatric).unwrap(),
            "\"GERIATRIC\""
        );
    }
}
