// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Takeoff Screening
pub const SCREEN_HEIGHT: f64 = 10.7; // m (35 ft obstacle clearance)

// Simulation Parameters
pub const TIME_STEP: f64 = 0.1; // s
pub const MAXIMUM_NR_OF_ITERATIONS: usize = 10_000;
pub const MAXIMUM_FAILURE_SPEED: usize = 100; // m/s, sweep ceiling for the reference driver

// Dynamics Thresholds
pub const AIRSPEED_THRESHOLD: f64 = 1.0; // m/s, flight-path dynamics are frozen below this
