use takeoff_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
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

    let engines = EngineData::new(2, 1, 75_000.0)?;

    let aircraft = AircraftData::new(
        engines.nr_of_engines,
        engines.thrust_per_engine,
        500_000.0,
        Angle::from_degrees(3.0)?,
        Angle::from_degrees(12.0)?,
        0.02,
        0.30,
        aerodynamics,
    );

    let integrator = EulerIntegrator;
    let calculator = AggregatedDistanceCalculator::new(
        &aircraft,
        engines.nr_of_failed_engines,
        AIR_DENSITY_SEA_LEVEL,
        GRAVITY,
        SCREEN_HEIGHT,
        &integrator,
    );

    let outputs = calculator.sweep(MAXIMUM_FAILURE_SPEED, MAXIMUM_NR_OF_ITERATIONS, TIME_STEP)?;

    let mut telemetry = SweepTelemetry::new();
    for output in &outputs {
        telemetry.collect_data(output);
    }

    let result = resolve(&outputs)?;
    telemetry.display_data(&result);

    Ok(())
}
