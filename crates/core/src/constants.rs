//! Constants used throughout the Asclepius core crate.
//!
//! This module collects the plausibility-heuristic keyword lists and numeric
//! thresholds in one place so they can be tuned without touching the
//! validation or triage logic.

/// Minimum number of characters a symptom description must contain.
pub const MIN_SYMPTOM_LEN: usize = 20;

/// Placeholder phrases that mark a symptom description as filler text.
pub const SPAM_PHRASES: &[&str] = &["test", "testing", "asdf", "none"];

/// Minimum ratio of distinct words to total words before a description is
/// considered meaningless repetition. Only applied when the description has
/// more than [`REPETITION_MIN_WORDS`] words.
pub const MIN_UNIQUE_WORD_RATIO: f64 = 0.4;

/// Word count above which the repetition heuristic applies.
pub const REPETITION_MIN_WORDS: usize = 3;

/// Maximum number of `!` or `?` characters tolerated in a description.
pub const MAX_PUNCTUATION_REPEATS: usize = 3;

/// Terms that are implausible in a self-report for a patient under 12.
pub const ADULT_ONLY_TERMS: &[&str] = &[
    "pregnancy",
    "pregnant",
    "erectile",
    "prostate",
    "menopause",
];

/// High-acuity complaints that contradict a low self-reported severity in
/// elderly patients.
pub const HIGH_ACUITY_TERMS: &[&str] = &["chest pain", "stroke", "fall"];

/// Intensity wording expected when severity is self-reported at 8 or above.
pub const INTENSITY_TERMS: &[&str] = &[
    "severe",
    "unbearable",
    "intense",
    "extreme",
    "excruciating",
    "worst",
];

/// Emergency complaints. Used both to reject contradictory low-severity
/// reports and to short-circuit the triage classifier to the emergency tier.
pub const EMERGENCY_TERMS: &[&str] = &[
    "chest pain",
    "can't breathe",
    "severe bleeding",
    "stroke",
];

/// Age threshold below which adult-only terms are rejected.
pub const PEDIATRIC_AGE_LIMIT: u8 = 12;

/// Age threshold above which low-severity high-acuity reports are rejected.
pub const GERIATRIC_AGE_LIMIT: u8 = 70;

/// Recommendation text for the emergency triage tier.
pub const EMERGENCY_RECOMMENDATION: &str =
    "Call 112 immediately or go to the nearest emergency room";

/// Recommendation text for the severe triage tier.
pub const SEVERE_RECOMMENDATION: &str = "Seek medical attention within 4 hours";

/// Recommendation text for the moderate triage tier.
pub const MODERATE_RECOMMENDATION: &str = "Consider seeing a doctor within 24-48 hours";

/// Recommendation text for the mild triage tier.
pub const MILD_RECOMMENDATION: &str =
    "Monitor symptoms. Rest and stay hydrated. See a doctor if symptoms worsen.";
