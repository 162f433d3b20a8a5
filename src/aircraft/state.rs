use crate::utils::angle::Angle;

/// Integration variables of a takeoff run. Each step produces a new value
/// rather than mutating the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftState {
    pub pitch_angle: Angle,
    pub flight_path_angle: Angle,
    pub true_airspeed: f64, // m/s
    pub height: f64,        // m
    pub distance: f64,      // m
}

impl AircraftState {
    pub fn new() -> Self {
        AircraftState {
            pitch_angle: Angle::zero(),
            flight_path_angle: Angle::zero(),
            true_airspeed: 0.0,
            height: 0.0,
            distance: 0.0,
        }
    }
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::new()
    }
}

/// Instantaneous derivatives produced by a dynamics calculator.
#[derive(Debug, Clone, Copy)]
pub struct AircraftAccelerations {
    pub pitch_rate: Angle,       // per second
    pub flight_path_rate: Angle, // per second
    pub true_airspeed_rate: f64, // m/s²
    pub climb_rate: f64,         // m/s
}

impl AircraftAccelerations {
    pub fn zero() -> Self {
        AircraftAccelerations {
            pitch_rate: Angle::zero(),
            flight_path_rate: Angle::zero(),
            true_airspeed_rate: 0.0,
            climb_rate: 0.0,
        }
    }
}
