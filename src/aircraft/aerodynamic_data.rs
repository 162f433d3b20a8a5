use crate::utils::angle::Angle;

#[derive(Debug, Clone)]
pub struct AerodynamicData {
    pub aspect_ratio: f64,
    pub wing_area: f64, // m²
    pub zero_lift_angle_of_attack: Angle,
    pub lift_coefficient_gradient: f64, // per radian
    pub maximum_lift_coefficient: f64,
    pub rest_drag_coefficient: f64,
    pub rest_drag_coefficient_engine_failure: f64,
    pub oswald_factor: f64,
}

impl AerodynamicData {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        aspect_ratio: f64,
        wing_area: f64,
        zero_lift_angle_of_attack: Angle,
        lift_coefficient_gradient: f64,
        maximum_lift_coefficient: f64,
        rest_drag_coefficient: f64,
        rest_drag_coefficient_engine_failure: f64,
        oswald_factor: f64,
    ) -> Self {
        AerodynamicData {
            aspect_ratio,
            wing_area,
            zero_lift_angle_of_attack,
            lift_coefficient_gradient,
            maximum_lift_coefficient,
            rest_drag_coefficient,
            rest_drag_coefficient_engine_failure,
            oswald_factor,
        }
    }
}
