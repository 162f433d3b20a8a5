use crate::aircraft::aircraft_data::AircraftData;
use crate::aircraft::settings::CalculationSettings;
use crate::errors::SimulationError;
use crate::takeoff_system::distance::DistanceCalculator;
use crate::takeoff_system::integrator::Integrator;

/// One sample point on the two distance-vs-speed curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedDistanceOutput {
    pub failure_speed: f64, // m/s
    pub continued_takeoff_distance: f64, // m
    pub aborted_takeoff_distance: f64,   // m
}

/// Runs both takeoff scenarios for candidate failure speeds. The scenarios
/// share the pre-failure ground roll by construction: both use the same
/// normal dynamics below the failure speed.
pub struct AggregatedDistanceCalculator<'a> {
    aircraft: &'a AircraftData,
    nr_of_failed_engines: usize,
    density: f64,
    gravity: f64,
    screen_height: f64,
    integrator: &'a dyn Integrator,
}

impl<'a> AggregatedDistanceCalculator<'a> {
    pub fn new(
        aircraft: &'a AircraftData,
        nr_of_failed_engines: usize,
        density: f64,
        gravity: f64,
        screen_height: f64,
        integrator: &'a dyn Integrator,
    ) -> Self {
        AggregatedDistanceCalculator {
            aircraft,
            nr_of_failed_engines,
            density,
            gravity,
            screen_height,
            integrator,
        }
    }

    pub fn calculate(
        &self,
        settings: CalculationSettings,
    ) -> Result<AggregatedDistanceOutput, SimulationError> {
        let continued_takeoff_distance = DistanceCalculator::continued_takeoff(
            self.aircraft,
            self.nr_of_failed_engines,
            self.density,
            self.gravity,
            self.screen_height,
            self.integrator,
            settings,
        )
        .calculate()?;

        let aborted_takeoff_distance = DistanceCalculator::aborted_takeoff(
            self.aircraft,
            self.density,
            self.gravity,
            self.integrator,
            settings,
        )
        .calculate()?;

        Ok(AggregatedDistanceOutput {
            failure_speed: settings.failure_speed,
            continued_takeoff_distance,
            aborted_takeoff_distance,
        })
    }

    /// Sweeps integer candidate failure speeds from 0 up to and including
    /// the ceiling, one aggregated output per speed.
    pub fn sweep(
        &self,
        maximum_failure_speed: usize,
        maximum_nr_of_iterations: usize,
        time_step: f64,
    ) -> Result<Vec<AggregatedDistanceOutput>, SimulationError> {
        let mut outputs = Vec::with_capacity(maximum_failure_speed + 1);
        for failure_speed in 0..=maximum_failure_speed {
            let settings = CalculationSettings::new(
                failure_speed as f64,
                maximum_nr_of_iterations,
                time_step,
            );
            outputs.push(self.calculate(settings)?);
        }
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::aerodynamic_data::AerodynamicData;
    use crate::takeoff_system::integrator::EulerIntegrator;
    use crate::utils::angle::Angle;

    fn create_test_aircraft() -> AircraftData {
        let aerodynamics = AerodynamicData::new(
            9.0,
            100.0,
            Angle::zero(),
            4.85,
            1.6,
            0.021,
            0.026,
            0.85,
        );
        AircraftData::new(
            2,
            75_000.0,
            500_000.0,
            Angle::from_degrees(3.0).unwrap(),
            Angle::from_degrees(12.0).unwrap(),
            0.02,
            0.30,
            aerodynamics,
        )
    }

    #[test]
    fn test_aggregated_output_carries_both_distances() {
        let aircraft = create_test_aircraft();
        let integrator = EulerIntegrator;
        let calculator =
            AggregatedDistanceCalculator::new(&aircraft, 1, 1.225, 9.81, 10.7, &integrator);

        let output = calculator
            .calculate(CalculationSettings::new(50.0, 20_000, 0.1))
            .unwrap();

        assert_eq!(output.failure_speed, 50.0);
        assert!(output.continued_takeoff_distance > output.aborted_takeoff_distance,
            "an engine lost at 50 m/s should make continuing costlier than stopping: {} m vs {} m",
            output.continued_takeoff_distance, output.aborted_takeoff_distance);
    }

    #[test]
    fn test_sweep_produces_one_output_per_speed() {
        let aircraft = create_test_aircraft();
        let integrator = EulerIntegrator;
        let calculator =
            AggregatedDistanceCalculator::new(&aircraft, 1, 1.225, 9.81, 10.7, &integrator);

        let outputs = calculator.sweep(10, 20_000, 0.25).unwrap();

        assert_eq!(outputs.len(), 11);
        for (index, output) in outputs.iter().enumerate() {
            assert_eq!(output.failure_speed, index as f64);
        }
    }
}
