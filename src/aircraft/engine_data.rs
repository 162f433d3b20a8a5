use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy)]
pub struct EngineData {
    pub nr_of_engines: usize,
    pub nr_of_failed_engines: usize,
    pub thrust_per_engine: f64, // N
}

impl EngineData {
    pub fn new(
        nr_of_engines: usize,
        nr_of_failed_engines: usize,
        thrust_per_engine: f64,
    ) -> Result<Self, SimulationError> {
        if nr_of_failed_engines > nr_of_engines {
            return Err(SimulationError::InvalidArgument(format!(
                "{} failed engines exceeds the {} installed",
                nr_of_failed_engines, nr_of_engines
            )));
        }
        Ok(EngineData {
            nr_of_engines,
            nr_of_failed_engines,
            thrust_per_engine,
        })
    }

    pub fn operative_engines(&self) -> usize {
        self.nr_of_engines - self.nr_of_failed_engines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_data_construction() {
        let engines = EngineData::new(4, 1, 60_000.0).unwrap();
        assert_eq!(engines.operative_engines(), 3);
    }

    #[test]
    fn test_more_failures_than_engines_rejected() {
        let result = EngineData::new(2, 3, 60_000.0);
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
    }
}
