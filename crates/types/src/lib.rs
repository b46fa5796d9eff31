/// Errors that can occur when creating range-validated scalar types.
#[derive(Debug, thiserror::Error)]
pub enum RangeError {
    /// Self-reported severity outside the 1-10 scale
    #[error("severity must be between 1 and 10 (got {0})")]
    Severity(u8),
    /// Heart rate outside the measurable 40-200 bpm window
    #[error("heart rate must be between 40 and 200 bpm (got {0})")]
    HeartRate(u16),
    /// Body temperature outside the survivable 95.0-108.0 °F window
    #[error("temperature must be between 95.0 and 108.0 °F (got {0})")]
    Temperature(f64),
}

/// A self-reported symptom severity on a 1-10 scale.
///
/// This type wraps a `u8` and guarantees the value lies within the declared
/// scale. Out-of-range values are rejected during construction and during
/// deserialization, so any `Severity` held by the rest of the system is
/// already known to be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, utoipa::ToSchema)]
pub struct Severity(u8);

impl Severity {
    /// Creates a new `Severity` from the given value.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Severity)` if the value is within 1..=10,
    /// or `Err(RangeError::Severity)` otherwise.
    pub fn new(value: u8) -> Result<Self, RangeError> {
        if !(1..=10).contains(&value) {
            return Err(RangeError::Severity(value));
        }
        Ok(Self(value))
    }

    /// Returns the inner value.
    pub fn get(self) -> u8 {
        self.0
    }
}

/// A heart rate in beats per minute, constrained to 40-200 bpm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, utoipa::ToSchema)]
pub struct HeartRate(u16);

impl HeartRate {
    /// Creates a new `HeartRate` from the given value.
    ///
    /// # Returns
    ///
    /// Returns `Ok(HeartRate)` if the value is within 40..=200,
    /// or `Err(RangeError::HeartRate)` otherwise.
    pub fn new(value: u16) -> Result<Self, RangeError> {
        if !(40..=200).contains(&value) {
            return Err(RangeError::HeartRate(value));
        }
        Ok(Self(value))
    }

    /// Returns the inner value in beats per minute.
    pub fn get(self) -> u16 {
        self.0
    }
}

/// A body temperature in degrees Fahrenheit, constrained to 95.0-108.0 °F.
#[derive(Debug, Clone, Copy, PartialEq, utoipa::ToSchema)]
pub struct TemperatureF(f64);

impl TemperatureF {
    /// Creates a new `TemperatureF` from the given value.
    ///
    /// Non-finite values fail the range check and are rejected.
    ///
    /// # Returns
    ///
    /// Returns `Ok(TemperatureF)` if the value is within 95.0..=108.0,
    /// or `Err(RangeError::Temperature)` otherwise.
    pub fn new(value: f64) -> Result<Self, RangeError> {
        if !(95.0..=108.0).contains(&value) {
            return Err(RangeError::Temperature(value));
        }
        Ok(Self(value))
    }

    /// Returns the inner value in degrees Fahrenheit.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for HeartRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for TemperatureF {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Severity::new(value).map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for HeartRate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for HeartRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u16::deserialize(deserializer)?;
        HeartRate::new(value).map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for TemperatureF {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for TemperatureF {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        TemperatureF::new(value).map_err(serde::de::Error::custom)
    }
}
