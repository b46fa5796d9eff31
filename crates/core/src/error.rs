/// Failure modes of the blood-pressure string validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VitalsError {
    #[error("blood pressure must be two 2-3 digit numbers separated by '/', e.g. 120/80")]
    InvalidFormat,
    #[error(
        "blood pressure {systolic}/{diastolic} is outside the measurable range \
         (systolic 70-200, diastolic 40-130)"
    )]
    OutOfRange { systolic: u16, diastolic: u16 },
    #[error("systolic pressure must be greater than diastolic (got {systolic}/{diastolic})")]
    Inconsistent { systolic: u16, diastolic: u16 },
}

/// Reasons an intake record can be rejected before scoring.
///
/// The validation chain short-circuits on the first failing rule, so a
/// rejected record always carries exactly one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("symptom description must be at least {min} characters (got {got})")]
    TextTooShort { got: usize, min: usize },
    #[error("symptom description looks like placeholder text; please describe real symptoms")]
    SpamOrMeaninglessText,
    #[error("symptom description repeats the same words too often to be meaningful")]
    RepetitiveText,
    #[error("symptom description contains excessive punctuation")]
    ExcessivePunctuation,
    #[error("invalid blood pressure: {0}")]
    InvalidBloodPressure(#[from] VitalsError),
    #[error("age must be between 1 and 120 (got {0})")]
    AgeOutOfRange(u8),
    #[error("symptoms are implausible for a patient aged {age}: \"{term}\" is an adult-only term")]
    AgeSymptomMismatch { age: u8, term: &'static str },
    #[error("severity {severity}/10 is inconsistent with the symptom description: {detail}")]
    SeverityTextMismatch { severity: u8, detail: String },
}

impl IntakeError {
    /// The input field the error should be reported against.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TextTooShort { .. }
            | Self::SpamOrMeaninglessText
            | Self::RepetitiveText
            | Self::ExcessivePunctuation
            | Self::AgeSymptomMismatch { .. } => "symptoms",
            Self::InvalidBloodPressure(_) => "blood_pressure",
            Self::AgeOutOfRange(_) => "age",
            Self::SeverityTextMismatch { .. } => "severity",
        }
    }

    /// A stable machine-readable identifier for the violated rule.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TextTooShort { .. } => "text_too_short",
            Self::SpamOrMeaninglessText => "spam_or_meaningless_text",
            Self::RepetitiveText => "repetitive_text",
            Self::ExcessivePunctuation => "excessive_punctuation",
            Self::InvalidBloodPressure(_) => "invalid_blood_pressure",
            Self::AgeOutOfRange(_) => "age_out_of_range",
            Self::AgeSymptomMismatch { .. } => "age_symptom_mismatch",
            Self::SeverityTextMismatch { .. } => "severity_text_mismatch",
        }
    }
}

pub type IntakeResult<T> = std::result::Result<T, IntakeError>;
