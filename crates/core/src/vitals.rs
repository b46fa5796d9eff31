//! Vital-signs validation.
//!
//! Currently covers the blood-pressure string submitted with an intake
//! record. The reading arrives as free text (`"120/80"`) and is checked for
//! shape, measurable range, and internal consistency before it is accepted.

use crate::error::VitalsError;

/// A parsed, range-checked blood-pressure reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressure {
    systolic: u16,
    diastolic: u16,
}

impl BloodPressure {
    /// Systolic pressure in mmHg.
    pub fn systolic(self) -> u16 {
        self.systolic
    }

    /// Diastolic pressure in mmHg.
    pub fn diastolic(self) -> u16 {
        self.diastolic
    }
}

impl std::fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// Validates a raw blood-pressure string.
///
/// The string must be exactly two groups of 2-3 ASCII digits separated by a
/// single `/`. The parsed values must fall inside the measurable ranges
/// (systolic 70-200, diastolic 40-130) and systolic must exceed diastolic.
///
/// # Errors
///
/// Returns a [`VitalsError`] naming the failed check. Pure; no side effects.
pub fn validate_blood_pressure(raw: &str) -> Result<BloodPressure, VitalsError> {
    let Some((sys_part, dia_part)) = raw.split_once('/') else {
        return Err(VitalsError::InvalidFormat);
    };

    if !is_pressure_group(sys_part) || !is_pressure_group(dia_part) {
        return Err(VitalsError::InvalidFormat);
    }

    // Groups are at most three digits, so u16 parsing cannot fail or overflow.
    let systolic: u16 = sys_part.parse().map_err(|_| VitalsError::InvalidFormat)?;
    let diastolic: u16 = dia_part.parse().map_err(|_| VitalsError::InvalidFormat)?;

    if !(70..=200).contains(&systolic) || !(40..=130).contains(&diastolic) {
        return Err(VitalsError::OutOfRange {
            systolic,
            diastolic,
        });
    }

    if systolic <= diastolic {
        return Err(VitalsError::Inconsistent {
            systolic,
            diastolic,
        });
    }

    Ok(BloodPressure {
        systolic,
        diastolic,
    })
}

fn is_pressure_group(part: &str) -> bool {
    (2..=3).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}
