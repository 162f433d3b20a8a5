use crate::aircraft::state::{AircraftAccelerations, AircraftState};
use crate::errors::SimulationError;
use crate::utils::angle::Angle;

/// Single-step, stateless integration seam. Alternate schemes plug in here
/// without touching the distance calculator.
pub trait Integrator {
    fn integrate(
        &self,
        state: &AircraftState,
        accelerations: &AircraftAccelerations,
        time_step: f64,
    ) -> Result<AircraftState, SimulationError>;
}

pub struct EulerIntegrator;

impl Integrator for EulerIntegrator {
    fn integrate(
        &self,
        state: &AircraftState,
        accelerations: &AircraftAccelerations,
        time_step: f64,
    ) -> Result<AircraftState, SimulationError> {
        // Angles advance in radians and re-enter through the factory, so a
        // step that leaves the valid domain surfaces as an error here.
        let pitch_angle = Angle::from_radians(
            state.pitch_angle.radians() + accelerations.pitch_rate.radians() * time_step,
        )?;
        let flight_path_angle = Angle::from_radians(
            state.flight_path_angle.radians()
                + accelerations.flight_path_rate.radians() * time_step,
        )?;

        Ok(AircraftState {
            pitch_angle,
            flight_path_angle,
            true_airspeed: state.true_airspeed + accelerations.true_airspeed_rate * time_step,
            height: state.height + accelerations.climb_rate * time_step,
            distance: state.distance + state.true_airspeed * time_step,
        })
    }
}
