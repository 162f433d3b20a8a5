use crate::aircraft::aircraft_data::AircraftData;
use crate::aircraft::state::{AircraftAccelerations, AircraftState};
use crate::constants::AIRSPEED_THRESHOLD;
use crate::errors::SimulationError;
use crate::takeoff_system::aerodynamics;
use crate::utils::angle::Angle;

/// The three strategy slots that distinguish the takeoff scenarios:
/// friction coefficient, total thrust, and the rest-drag selector. The
/// rotation trigger is carried alongside; ground-bound scenarios have none.
#[derive(Debug, Clone, Copy)]
pub struct DynamicsPolicy {
    pub friction_coefficient: f64,
    pub thrust: f64, // N
    pub engine_failure_drag: bool,
    pub rotation_speed: Option<f64>, // m/s
}

impl DynamicsPolicy {
    /// Pre-failure ground roll: every engine at full thrust.
    pub fn normal(aircraft: &AircraftData) -> Self {
        DynamicsPolicy {
            friction_coefficient: aircraft.rolling_resistance_coefficient,
            thrust: aircraft.total_thrust(),
            engine_failure_drag: false,
            rotation_speed: None,
        }
    }

    /// Rejected takeoff: engines at idle, brakes applied.
    pub fn aborted(aircraft: &AircraftData) -> Self {
        DynamicsPolicy {
            friction_coefficient: aircraft.brake_resistance_coefficient,
            thrust: 0.0,
            engine_failure_drag: true,
            rotation_speed: None,
        }
    }

    /// Climb-out on the remaining engines, rotating at the trigger speed.
    pub fn continued(
        aircraft: &AircraftData,
        nr_of_failed_engines: usize,
        rotation_speed: f64,
    ) -> Self {
        let operative_engines = aircraft.nr_of_engines.saturating_sub(nr_of_failed_engines);
        DynamicsPolicy {
            friction_coefficient: aircraft.rolling_resistance_coefficient,
            thrust: operative_engines as f64 * aircraft.maximum_thrust_per_engine,
            engine_failure_drag: true,
            rotation_speed: Some(rotation_speed),
        }
    }
}

/// Computes instantaneous accelerations from aircraft state. One shared
/// force-balance algorithm; the scenarios differ only through the policy.
pub struct TakeOffDynamicsCalculator {
    aircraft: AircraftData,
    policy: DynamicsPolicy,
    density: f64,
    gravity: f64,
}

impl TakeOffDynamicsCalculator {
    pub fn new(aircraft: AircraftData, policy: DynamicsPolicy, density: f64, gravity: f64) -> Self {
        TakeOffDynamicsCalculator {
            aircraft,
            policy,
            density,
            gravity,
        }
    }

    pub fn calculate(&self, state: &AircraftState) -> Result<AircraftAccelerations, SimulationError> {
        let velocity = state.true_airspeed;
        let weight = self.aircraft.takeoff_weight;
        let flight_path_radians = state.flight_path_angle.radians();

        // Ground-roll assumption: body incidence drives lift and drag.
        let angle_of_attack = state.pitch_angle.sub(&state.flight_path_angle)?;

        let lift = aerodynamics::calculate_lift(
            &self.aircraft.aerodynamics,
            angle_of_attack,
            self.density,
            velocity,
        );
        let lift_coefficient =
            aerodynamics::calculate_lift_coefficient(&self.aircraft.aerodynamics, angle_of_attack);
        let drag = aerodynamics::calculate_drag(
            &self.aircraft.aerodynamics,
            lift_coefficient,
            self.policy.engine_failure_drag,
            self.density,
            velocity,
        );

        // The runway carries whatever weight the wings do not; never negative.
        let normal_force = (weight * flight_path_radians.cos() - lift).max(0.0);

        let net_force = self.policy.thrust - drag - self.policy.friction_coefficient * normal_force;
        let true_airspeed_rate = self.gravity * net_force / weight;

        let pitch_rate = if self.should_rotate(state) {
            self.aircraft.pitch_angle_gradient
        } else {
            Angle::zero()
        };

        // Zero while the ground holds the aircraft: the normal force exactly
        // balances the lift deficit, so the trajectory cannot pitch down.
        let flight_path_rate = if velocity < AIRSPEED_THRESHOLD {
            Angle::zero()
        } else {
            Angle::from_radians(
                self.gravity * (lift + normal_force - weight * flight_path_radians.cos())
                    / (weight * velocity),
            )?
        };

        let climb_rate = velocity * flight_path_radians.sin();

        Ok(AircraftAccelerations {
            pitch_rate,
            flight_path_rate,
            true_airspeed_rate,
            climb_rate,
        })
    }

    pub fn maximum_pitch_angle(&self) -> Angle {
        self.aircraft.maximum_pitch_angle
    }

    fn should_rotate(&self, state: &AircraftState) -> bool {
        match self.policy.rotation_speed {
            Some(rotation_speed) => {
                state.true_airspeed >= rotation_speed
                    && state.pitch_angle < self.aircraft.maximum_pitch_angle
            }
            None => false,
        }
    }
}
