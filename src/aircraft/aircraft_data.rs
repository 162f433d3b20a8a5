use crate::aircraft::aerodynamic_data::AerodynamicData;
use crate::utils::angle::Angle;

#[derive(Debug, Clone)]
pub struct AircraftData {
    pub nr_of_engines: usize,
    pub maximum_thrust_per_engine: f64, // N
    pub takeoff_weight: f64,            // N
    pub pitch_angle_gradient: Angle,    // per second
    pub maximum_pitch_angle: Angle,
    pub rolling_resistance_coefficient: f64,
    pub brake_resistance_coefficient: f64,
    pub aerodynamics: AerodynamicData,
}

impl AircraftData {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nr_of_engines: usize,
        maximum_thrust_per_engine: f64,
        takeoff_weight: f64,
        pitch_angle_gradient: Angle,
        maximum_pitch_angle: Angle,
        rolling_resistance_coefficient: f64,
        brake_resistance_coefficient: f64,
        aerodynamics: AerodynamicData,
    ) -> Self {
        AircraftData {
            nr_of_engines,
            maximum_thrust_per_engine,
            takeoff_weight,
            pitch_angle_gradient,
            maximum_pitch_angle,
            rolling_resistance_coefficient,
            brake_resistance_coefficient,
            aerodynamics,
        }
    }

    pub fn total_thrust(&self) -> f64 {
        self.nr_of_engines as f64 * self.maximum_thrust_per_engine
    }
}
