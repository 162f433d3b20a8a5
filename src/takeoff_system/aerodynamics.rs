use std::f64::consts::PI;

use crate::aircraft::aerodynamic_data::AerodynamicData;
use crate::utils::angle::Angle;

pub fn calculate_dynamic_pressure(density: f64, velocity: f64) -> f64 {
    0.5 * density * velocity.powi(2)
}

// The coefficient works on the raw radian difference: an angle of attack
// below the zero-lift angle produces a negative coefficient (downforce).
pub fn calculate_lift_coefficient(data: &AerodynamicData, angle_of_attack: Angle) -> f64 {
    data.lift_coefficient_gradient
        * (angle_of_attack.radians() - data.zero_lift_angle_of_attack.radians())
}

pub fn calculate_lift(
    data: &AerodynamicData,
    angle_of_attack: Angle,
    density: f64,
    velocity: f64,
) -> f64 {
    let lift_coefficient = calculate_lift_coefficient(data, angle_of_attack);
    lift_coefficient * calculate_dynamic_pressure(density, velocity) * data.wing_area
}

pub fn calculate_drag_coefficient(
    data: &AerodynamicData,
    lift_coefficient: f64,
    engine_failed: bool,
) -> f64 {
    let rest_drag_coefficient = if engine_failed {
        data.rest_drag_coefficient_engine_failure
    } else {
        data.rest_drag_coefficient
    };
    let induced_drag_coefficient =
        lift_coefficient.powi(2) / (PI * data.aspect_ratio * data.oswald_factor);

    rest_drag_coefficient + induced_drag_coefficient
}

pub fn calculate_drag(
    data: &AerodynamicData,
    lift_coefficient: f64,
    engine_failed: bool,
    density: f64,
    velocity: f64,
) -> f64 {
    let drag_coefficient = calculate_drag_coefficient(data, lift_coefficient, engine_failed);
    drag_coefficient * calculate_dynamic_pressure(density, velocity) * data.wing_area
}
