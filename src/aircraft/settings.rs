/// Numerical settings for a single simulation run. The iteration cap is a
/// correctness fuse: exhausting it means the configuration cannot reach a
/// physically meaningful terminal state.
#[derive(Debug, Clone, Copy)]
pub struct CalculationSettings {
    pub failure_speed: f64, // m/s
    pub maximum_nr_of_iterations: usize,
    pub time_step: f64, // s
}

impl CalculationSettings {
    pub fn new(failure_speed: f64, maximum_nr_of_iterations: usize, time_step: f64) -> Self {
        CalculationSettings {
            failure_speed,
            maximum_nr_of_iterations,
            time_step,
        }
    }
}
