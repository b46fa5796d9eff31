//! Symptom-record validation.
//!
//! This module turns a raw [`SymptomInput`] into a validated
//! [`IntakeRecord`], or rejects it with the first rule that fails. The rules
//! run in a fixed order so that a given bad record always reports the same
//! error:
//!
//! 1. field-level checks (symptom length, age range, blood pressure),
//! 2. text-quality heuristics (placeholder text, repetition, punctuation),
//! 3. cross-field plausibility (age vs symptoms, severity vs symptoms).
//!
//! Keyword matching is a case-insensitive substring test against the
//! lower-cased symptom text; the keyword sets live in [`crate::constants`].

use std::collections::HashSet;

use crate::constants::{
    ADULT_ONLY_TERMS, EMERGENCY_TERMS, GERIATRIC_AGE_LIMIT, HIGH_ACUITY_TERMS, INTENSITY_TERMS,
    MAX_PUNCTUATION_REPEATS, MIN_SYMPTOM_LEN, MIN_UNIQUE_WORD_RATIO, PEDIATRIC_AGE_LIMIT,
    REPETITION_MIN_WORDS, SPAM_PHRASES,
};
use crate::error::{IntakeError, IntakeResult};
use crate::record::{IntakeRecord, SymptomInput};
use crate::vitals;

/// Validates a candidate record and produces an [`IntakeRecord`].
///
/// The only normalization applied is trimming the symptom text. Rules
/// short-circuit: the returned error identifies the first violated rule.
///
/// # Errors
///
/// Returns an [`IntakeError`] naming the violated rule and the offending
/// values.
pub fn validate(input: SymptomInput) -> IntakeResult<IntakeRecord> {
    let symptoms = input.symptoms.trim().to_owned();

    let char_count = symptoms.chars().count();
    if char_count < MIN_SYMPTOM_LEN {
        return Err(IntakeError::TextTooShort {
            got: char_count,
            min: MIN_SYMPTOM_LEN,
        });
    }

    if let Some(age) = input.age {
        if !(1..=120).contains(&age) {
            return Err(IntakeError::AgeOutOfRange(age));
        }
    }

    let blood_pressure = input
        .blood_pressure
        .as_deref()
        .map(vitals::validate_blood_pressure)
        .transpose()?;

    let lowered = symptoms.to_lowercase();
    check_text_quality(&lowered)?;

    // Age vs symptoms: adult-only complaints from a pediatric patient.
    if let Some(age) = input.age {
        if age < PEDIATRIC_AGE_LIMIT {
            if let Some(term) = contains_any(&lowered, ADULT_ONLY_TERMS) {
                return Err(IntakeError::AgeSymptomMismatch { age, term });
            }
        }
    }

    // Age vs severity vs symptoms: elderly patients reporting high-acuity
    // complaints as barely severe. Contradictory self-report.
    if let (Some(age), Some(severity)) = (input.age, input.severity) {
        if age > GERIATRIC_AGE_LIMIT && severity.get() < 3 {
            if let Some(term) = contains_any(&lowered, HIGH_ACUITY_TERMS) {
                tracing::warn!(age, severity = severity.get(), term, "contradictory self-report");
                return Err(IntakeError::SeverityTextMismatch {
                    severity: severity.get(),
                    detail: format!("\"{term}\" reported with a severity below 3"),
                });
            }
        }
    }

    // Severity vs symptoms, high end: a severity of 8+ should come with at
    // least one intensity word.
    if let Some(severity) = input.severity {
        if severity.get() >= 8 && contains_any(&lowered, INTENSITY_TERMS).is_none() {
            return Err(IntakeError::SeverityTextMismatch {
                severity: severity.get(),
                detail: "no intensity wording found for a severity of 8 or higher".into(),
            });
        }
    }

    // Severity vs symptoms, low end: emergency complaints reported as mild.
    if let Some(severity) = input.severity {
        if severity.get() <= 3 {
            if let Some(term) = contains_any(&lowered, EMERGENCY_TERMS) {
                return Err(IntakeError::SeverityTextMismatch {
                    severity: severity.get(),
                    detail: format!("emergency wording \"{term}\" with a severity of 3 or lower"),
                });
            }
        }
    }

    Ok(IntakeRecord {
        symptoms,
        duration: input.duration,
        severity: input.severity,
        age: input.age,
        heart_rate: input.heart_rate,
        blood_pressure,
        temperature: input.temperature,
    })
}

/// Rejects placeholder, repetitive, and over-punctuated descriptions.
///
/// Expects the already lower-cased, trimmed text.
fn check_text_quality(lowered: &str) -> IntakeResult<()> {
    if SPAM_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
        return Err(IntakeError::SpamOrMeaninglessText);
    }

    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.len() > REPETITION_MIN_WORDS {
        let distinct: HashSet<&str> = words.iter().copied().collect();
        let ratio = distinct.len() as f64 / words.len() as f64;
        if ratio < MIN_UNIQUE_WORD_RATIO {
            return Err(IntakeError::RepetitiveText);
        }
    }

    let exclamations = lowered.matches('!').count();
    let questions = lowered.matches('?').count();
    if exclamations > MAX_PUNCTUATION_REPEATS || questions > MAX_PUNCTUATION_REPEATS {
        return Err(IntakeError::ExcessivePunctuation);
    }

    Ok(())
}

/// Returns the first keyword contained in `text`, if any.
fn contains_any(text: &str, keywords: &'static [&'static str]) -> Option<&'static str> {
    keywords.iter().find(|kw| text.contains(*kw)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use asclepius_types::Severity;

    fn input(symptoms: &str) -> SymptomInput {
        SymptomInput {
            symptoms: symptoms.to_owned(),
            duration: None,
            severity: None,
            age: None,
            heart_rate: None,
            blood_pressure: None,
            temperature: None,
        }
    }

    const VALID_TEXT: &str = "I have a persistent headache and feel dizzy when standing up";

    #[test]
    fn test_accepts_plain_valid_record() {
        let record = validate(input(VALID_TEXT)).expect("should accept valid record");
        assert_eq!(record.symptoms(), VALID_TEXT);
    }

    #[test]
    fn test_trims_symptom_text() {
        let record = validate(input("   persistent headache and dizziness all week   "))
            .expect("should accept padded text");
        assert_eq!(record.symptoms(), "persistent headache and dizziness all week");
    }

    #[test]
    fn test_rejects_short_text() {
        let err = validate(input("sore throat")).expect_err("should reject short text");
        assert!(matches!(err, IntakeError::TextTooShort { got: 11, min: 20 }));
    }

    #[test]
    fn test_rejects_placeholder_text_any_case_and_padding() {
        for text in ["  TEST  ", "Testing testing testing testing", "ASDF"] {
            let err = validate(input(text)).expect_err("placeholder text must be rejected");
            // Short placeholders trip the length rule first; longer ones the
            // spam rule. Either way the record never reaches scoring.
            assert!(matches!(
                err,
                IntakeError::TextTooShort { .. } | IntakeError::SpamOrMeaninglessText
            ));
        }
    }

    #[test]
    fn test_rejects_spam_phrase_in_long_text() {
        let err = validate(input("asdf asdf something hurts somewhere around here"))
            .expect_err("should reject spam phrase");
        assert_eq!(err, IntakeError::SpamOrMeaninglessText);
    }

    #[test]
    fn test_rejects_repetitive_text() {
        let err = validate(input("pain pain pain pain pain pain pain pain pain pain"))
            .expect_err("should reject repetition");
        assert_eq!(err, IntakeError::RepetitiveText);
    }

    #[test]
    fn test_allows_moderate_repetition() {
        // 8 words, 6 distinct: ratio 0.75 stays above the 0.4 floor.
        assert!(validate(input("my head hurts and my stomach hurts badly")).is_ok());
    }

    #[test]
    fn test_rejects_excessive_punctuation() {
        let err = validate(input("why does my head hurt so much????"))
            .expect_err("should reject punctuation abuse");
        assert_eq!(err, IntakeError::ExcessivePunctuation);

        let err = validate(input("my head hurts!!!! and my arm aches"))
            .expect_err("should reject punctuation abuse");
        assert_eq!(err, IntakeError::ExcessivePunctuation);
    }

    #[test]
    fn test_allows_three_punctuation_marks() {
        assert!(validate(input("my head hurts!!! and my arm aches too")).is_ok());
    }

    #[test]
    fn test_rejects_age_out_of_range() {
        let mut bad = input(VALID_TEXT);
        bad.age = Some(0);
        assert!(matches!(
            validate(bad).expect_err("age 0"),
            IntakeError::AgeOutOfRange(0)
        ));

        let mut bad = input(VALID_TEXT);
        bad.age = Some(121);
        assert!(matches!(
            validate(bad).expect_err("age 121"),
            IntakeError::AgeOutOfRange(121)
        ));
    }

    #[test]
    fn test_rejects_invalid_blood_pressure() {
        let mut bad = input(VALID_TEXT);
        bad.blood_pressure = Some("80/120".to_owned());
        let err = validate(bad).expect_err("inverted reading");
        assert!(matches!(
            err,
            IntakeError::InvalidBloodPressure(crate::error::VitalsError::Inconsistent { .. })
        ));
    }

    #[test]
    fn test_accepts_valid_blood_pressure() {
        let mut ok = input(VALID_TEXT);
        ok.blood_pressure = Some("120/80".to_owned());
        let record = validate(ok).expect("should accept 120/80");
        let bp = record.blood_pressure().expect("parsed reading");
        assert_eq!(bp.systolic(), 120);
    }

    #[test]
    fn test_rejects_adult_terms_for_pediatric_age() {
        let mut bad = input("worried about a possible pregnancy and stomach cramps");
        bad.age = Some(8);
        let err = validate(bad).expect_err("pediatric adult-term mismatch");
        assert!(matches!(
            err,
            IntakeError::AgeSymptomMismatch {
                age: 8,
                term: "pregnancy"
            }
        ));
    }

    #[test]
    fn test_allows_adult_terms_for_adults() {
        let mut ok = input("worried about a possible pregnancy and stomach cramps");
        ok.age = Some(30);
        assert!(validate(ok).is_ok());
    }

    #[test]
    fn test_rejects_low_severity_high_acuity_for_elderly() {
        let mut bad = input("crushing chest pain that spreads into my left arm");
        bad.age = Some(75);
        bad.severity = Some(Severity::new(2).unwrap());
        let err = validate(bad).expect_err("contradictory elderly self-report");
        assert!(matches!(
            err,
            IntakeError::SeverityTextMismatch { severity: 2, .. }
        ));
    }

    #[test]
    fn test_allows_high_acuity_for_elderly_without_severity() {
        let mut ok = input("crushing chest pain that spreads into my left arm");
        ok.age = Some(75);
        assert!(validate(ok).is_ok());
    }

    #[test]
    fn test_rejects_high_severity_without_intensity_words() {
        let mut bad = input("mild tiredness and a slight headache this morning");
        bad.severity = Some(Severity::new(9).unwrap());
        let err = validate(bad).expect_err("severity 9 with mild wording");
        assert!(matches!(
            err,
            IntakeError::SeverityTextMismatch { severity: 9, .. }
        ));
    }

    #[test]
    fn test_accepts_high_severity_with_intensity_words() {
        let mut ok = input("I have a severe, unbearable, intense headache that won't stop");
        ok.severity = Some(Severity::new(9).unwrap());
        ok.age = Some(35);
        assert!(validate(ok).is_ok());
    }

    #[test]
    fn test_rejects_low_severity_with_emergency_words() {
        let mut bad = input("sudden chest pain whenever I climb the stairs");
        bad.severity = Some(Severity::new(2).unwrap());
        let err = validate(bad).expect_err("severity 2 with emergency wording");
        assert!(matches!(
            err,
            IntakeError::SeverityTextMismatch { severity: 2, .. }
        ));
    }

    #[test]
    fn test_field_and_kind_reporting() {
        let err = validate(input("sore throat")).expect_err("short text");
        assert_eq!(err.field(), "symptoms");
        assert_eq!(err.kind(), "text_too_short");

        let mut bad = input(VALID_TEXT);
        bad.blood_pressure = Some("abc".to_owned());
        let err = validate(bad).expect_err("bad bp");
        assert_eq!(err.field(), "blood_pressure");
        assert_eq!(err.kind(), "invalid_blood_pressure");
    }
}
