pub mod aircraft;
pub mod constants;
pub mod errors;
pub mod takeoff_system;
pub mod telemetry_system;
pub mod utils;

pub use constants::*;
pub use errors::SimulationError;

pub use aircraft::aerodynamic_data::AerodynamicData;
pub use aircraft::aircraft_data::AircraftData;
pub use aircraft::engine_data::EngineData;
pub use aircraft::settings::CalculationSettings;
pub use aircraft::state::{AircraftAccelerations, AircraftState};

// Re-export commonly used items from takeoff_system
pub use takeoff_system::distance::{DistanceCalculator, TakeOffPhase};
pub use takeoff_system::dynamics::{DynamicsPolicy, TakeOffDynamicsCalculator};
pub use takeoff_system::integrator::{EulerIntegrator, Integrator};
pub use takeoff_system::kernel::{AggregatedDistanceCalculator, AggregatedDistanceOutput};
pub use takeoff_system::resolver::{resolve, BalancedFieldLength};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::SweepTelemetry;

// Re-export commonly used utilities
pub use utils::angle::Angle;
pub use utils::geometry::{determine_line_intersection, LineSegment, Point2D};
