use crate::aircraft::aircraft_data::AircraftData;
use crate::aircraft::settings::CalculationSettings;
use crate::aircraft::state::AircraftState;
use crate::errors::SimulationError;
use crate::takeoff_system::dynamics::{DynamicsPolicy, TakeOffDynamicsCalculator};
use crate::takeoff_system::integrator::Integrator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeOffPhase {
    GroundRoll,
    Rotation,
    Climb,
}

/// What ends a scenario: clearing the screen height (continued takeoff) or
/// coming to a full stop after the failure (aborted takeoff).
#[derive(Debug, Clone, Copy)]
enum TerminationCriterion {
    ScreenHeight(f64),
    FullStop,
}

/// Drives the integrator and a pair of dynamics calculators through the
/// takeoff phases until the scenario's terminal condition, yielding the
/// distance covered. Both scenarios share the pre-failure ground roll: the
/// normal dynamics apply below the failure speed, the scenario dynamics at
/// and above it.
pub struct DistanceCalculator<'a> {
    normal_dynamics: TakeOffDynamicsCalculator,
    failure_dynamics: TakeOffDynamicsCalculator,
    integrator: &'a dyn Integrator,
    settings: CalculationSettings,
    rotation_speed: Option<f64>,
    termination: TerminationCriterion,
}

impl<'a> DistanceCalculator<'a> {
    pub fn continued_takeoff(
        aircraft: &AircraftData,
        nr_of_failed_engines: usize,
        density: f64,
        gravity: f64,
        screen_height: f64,
        integrator: &'a dyn Integrator,
        settings: CalculationSettings,
    ) -> Self {
        let failure_policy =
            DynamicsPolicy::continued(aircraft, nr_of_failed_engines, settings.failure_speed);
        DistanceCalculator {
            normal_dynamics: TakeOffDynamicsCalculator::new(
                aircraft.clone(),
                DynamicsPolicy::normal(aircraft),
                density,
                gravity,
            ),
            failure_dynamics: TakeOffDynamicsCalculator::new(
                aircraft.clone(),
                failure_policy,
                density,
                gravity,
            ),
            integrator,
            settings,
            rotation_speed: failure_policy.rotation_speed,
            termination: TerminationCriterion::ScreenHeight(screen_height),
        }
    }

    pub fn aborted_takeoff(
        aircraft: &AircraftData,
        density: f64,
        gravity: f64,
        integrator: &'a dyn Integrator,
        settings: CalculationSettings,
    ) -> Self {
        DistanceCalculator {
            normal_dynamics: TakeOffDynamicsCalculator::new(
                aircraft.clone(),
                DynamicsPolicy::normal(aircraft),
                density,
                gravity,
            ),
            failure_dynamics: TakeOffDynamicsCalculator::new(
                aircraft.clone(),
                DynamicsPolicy::aborted(aircraft),
                density,
                gravity,
            ),
            integrator,
            settings,
            rotation_speed: None,
            termination: TerminationCriterion::FullStop,
        }
    }

    pub fn calculate(&self) -> Result<f64, SimulationError> {
        let mut state = AircraftState::new();
        let mut phase = TakeOffPhase::GroundRoll;
        let mut failure_occurred = state.true_airspeed >= self.settings.failure_speed;

        for _ in 0..self.settings.maximum_nr_of_iterations {
            let dynamics = if failure_occurred {
                &self.failure_dynamics
            } else {
                &self.normal_dynamics
            };

            let accelerations = dynamics.calculate(&state)?;
            state = self
                .integrator
                .integrate(&state, &accelerations, self.settings.time_step)?;

            if state.true_airspeed >= self.settings.failure_speed {
                failure_occurred = true;
            }
            phase = self.next_phase(phase, &state, dynamics);

            if self.is_finished(failure_occurred, &state) {
                return Ok(state.distance);
            }
        }

        Err(SimulationError::InvalidCalculation(format!(
            "no terminal state within {} iterations (stalled in {:?} at {:.1} m/s); \
             the settings cannot resolve this configuration",
            self.settings.maximum_nr_of_iterations, phase, state.true_airspeed
        )))
    }

    fn next_phase(
        &self,
        phase: TakeOffPhase,
        state: &AircraftState,
        dynamics: &TakeOffDynamicsCalculator,
    ) -> TakeOffPhase {
        match phase {
            TakeOffPhase::GroundRoll
                if self
                    .rotation_speed
                    .map_or(false, |speed| state.true_airspeed >= speed) =>
            {
                TakeOffPhase::Rotation
            }
            TakeOffPhase::Rotation if state.pitch_angle >= dynamics.maximum_pitch_angle() => {
                TakeOffPhase::Climb
            }
            other => other,
        }
    }

    fn is_finished(&self, failure_occurred: bool, state: &AircraftState) -> bool {
        match self.termination {
            TerminationCriterion::ScreenHeight(screen_height) => state.height >= screen_height,
            TerminationCriterion::FullStop => failure_occurred && state.true_airspeed <= 0.0,
        }
    }
}
