use std::cmp::Ordering;
use std::f64::consts::PI;

use crate::errors::SimulationError;

/// Range-validated angular value carrying both representations.
///
/// `Uninitialized` stands in for the NaN placeholder used by callers that
/// build state records field by field; the factories map NaN inputs onto it
/// so the sentinel survives arithmetic and integration unchanged.
#[derive(Debug, Clone, Copy)]
pub enum Angle {
    Valid { radians: f64, degrees: f64 },
    Uninitialized,
}

impl Angle {
    pub fn from_degrees(degrees: f64) -> Result<Self, SimulationError> {
        if degrees.is_nan() {
            return Ok(Angle::Uninitialized);
        }
        if !(0.0..=360.0).contains(&degrees) {
            return Err(SimulationError::OutOfRange(format!(
                "angle of {} degrees is outside [0, 360]",
                degrees
            )));
        }
        Ok(Angle::Valid {
            radians: degrees.to_radians(),
            degrees,
        })
    }

    pub fn from_radians(radians: f64) -> Result<Self, SimulationError> {
        if radians.is_nan() {
            return Ok(Angle::Uninitialized);
        }
        if !(0.0..=2.0 * PI).contains(&radians) {
            return Err(SimulationError::OutOfRange(format!(
                "angle of {} radians is outside [0, 2π]",
                radians
            )));
        }
        Ok(Angle::Valid {
            radians,
            degrees: radians.to_degrees(),
        })
    }

    pub fn zero() -> Self {
        Angle::Valid {
            radians: 0.0,
            degrees: 0.0,
        }
    }

    pub fn uninitialized() -> Self {
        Angle::Uninitialized
    }

    pub fn radians(&self) -> f64 {
        match self {
            Angle::Valid { radians, .. } => *radians,
            Angle::Uninitialized => f64::NAN,
        }
    }

    pub fn degrees(&self) -> f64 {
        match self {
            Angle::Valid { degrees, .. } => *degrees,
            Angle::Uninitialized => f64::NAN,
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self, Angle::Valid { .. })
    }

    // Sums and differences re-enter through the factory, so a result that
    // leaves [0, 2π] fails validation instead of silently wrapping.
    pub fn add(&self, other: &Angle) -> Result<Angle, SimulationError> {
        Angle::from_radians(self.radians() + other.radians())
    }

    pub fn sub(&self, other: &Angle) -> Result<Angle, SimulationError> {
        Angle::from_radians(self.radians() - other.radians())
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Angle::Valid { radians: a, .. }, Angle::Valid { radians: b, .. }) => a == b,
            (Angle::Uninitialized, Angle::Uninitialized) => true,
            _ => false,
        }
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Angle::Valid { radians: a, .. }, Angle::Valid { radians: b, .. }) => {
                a.partial_cmp(b)
            }
            (Angle::Uninitialized, Angle::Uninitialized) => Some(Ordering::Equal),
            _ => None,
        }
    }
}
