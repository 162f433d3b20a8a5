use crate::errors::SimulationError;
use crate::takeoff_system::kernel::AggregatedDistanceOutput;
use crate::utils::geometry::{determine_segment_intersection, LineSegment, Point2D};

/// The crossing of the two distance curves, or NaN/NaN when they never meet
/// inside the swept range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalancedFieldLength {
    pub velocity: f64, // m/s
    pub distance: f64, // m
}

impl BalancedFieldLength {
    pub fn unresolved() -> Self {
        BalancedFieldLength {
            velocity: f64::NAN,
            distance: f64::NAN,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.velocity.is_nan() && !self.distance.is_nan()
    }
}

/// Finds where the continued-takeoff and aborted-takeoff distance curves
/// cross. Outputs are sorted by failure speed, consecutive samples are
/// joined into line segments, and the first crossing scanning from the low
/// speeds wins.
pub fn resolve(
    outputs: &[AggregatedDistanceOutput],
) -> Result<BalancedFieldLength, SimulationError> {
    if outputs.len() < 2 {
        return Err(SimulationError::InvalidArgument(format!(
            "at least two aggregated outputs are needed to find a crossing, got {}",
            outputs.len()
        )));
    }

    let mut sorted = outputs.to_vec();
    sorted.sort_by(|a, b| a.failure_speed.total_cmp(&b.failure_speed));

    for pair in sorted.windows(2) {
        if pair[0].failure_speed == pair[1].failure_speed {
            return Err(SimulationError::InvalidArgument(format!(
                "duplicate failure speed {} in aggregated outputs",
                pair[0].failure_speed
            )));
        }
    }

    for pair in sorted.windows(2) {
        let (low, high) = (&pair[0], &pair[1]);
        let continued = LineSegment::new(
            Point2D::new(low.failure_speed, low.continued_takeoff_distance),
            Point2D::new(high.failure_speed, high.continued_takeoff_distance),
        );
        let aborted = LineSegment::new(
            Point2D::new(low.failure_speed, low.aborted_takeoff_distance),
            Point2D::new(high.failure_speed, high.aborted_takeoff_distance),
        );

        let crossing = determine_segment_intersection(&continued, &aborted);
        if !crossing.is_nan() {
            return Ok(BalancedFieldLength {
                velocity: crossing.x,
                distance: crossing.y,
            });
        }
    }

    Ok(BalancedFieldLength::unresolved())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn output(
        failure_speed: f64,
        continued_takeoff_distance: f64,
        aborted_takeoff_distance: f64,
    ) -> AggregatedDistanceOutput {
        AggregatedDistanceOutput {
            failure_speed,
            continued_takeoff_distance,
            aborted_takeoff_distance,
        }
    }

    #[test]
    fn test_crossing_curves_resolve() {
        let outputs = [
            output(0.0, 100.0, 50.0),
            output(10.0, 90.0, 70.0),
            output(20.0, 80.0, 90.0),
        ];

        let result = resolve(&outputs).unwrap();

        // The curves swap order between the 10 and 20 m/s samples; the
        // segments there meet at exactly (50/3, 250/3).
        assert!(result.is_resolved());
        assert!(result.velocity > 10.0 && result.velocity < 20.0);
        assert_relative_eq!(result.velocity, 50.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(result.distance, 250.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let outputs = [
            output(20.0, 80.0, 90.0),
            output(0.0, 100.0, 50.0),
            output(10.0, 90.0, 70.0),
        ];

        let result = resolve(&outputs).unwrap();

        assert_relative_eq!(result.velocity, 50.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_crossing_curves_yield_sentinel() {
        let outputs = [
            output(0.0, 100.0, 10.0),
            output(10.0, 110.0, 20.0),
            output(20.0, 120.0, 30.0),
        ];

        let result = resolve(&outputs).unwrap();

        assert!(!result.is_resolved());
        assert!(result.velocity.is_nan());
        assert!(result.distance.is_nan());
    }

    #[test]
    fn test_single_output_rejected() {
        let outputs = [output(5.0, 10.0, 20.0)];

        let result = resolve(&outputs);

        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
    }

    #[test]
    fn test_duplicate_failure_speed_rejected() {
        let outputs = [output(5.0, 10.0, 20.0), output(5.0, 30.0, 40.0)];

        let result = resolve(&outputs);

        match result {
            Err(SimulationError::InvalidArgument(message)) => {
                assert!(message.contains('5'), "message should name the duplicate: {message}");
            }
            other => panic!("expected an invalid-argument error, got {other:?}"),
        }
    }

    #[test]
    fn test_first_crossing_wins() {
        // Two geometric crossings: one between 0 and 10, one between 10
        // and 20. The low-speed crossing must be reported.
        let outputs = [
            output(0.0, 100.0, 60.0),
            output(10.0, 60.0, 100.0),
            output(20.0, 100.0, 60.0),
        ];

        let result = resolve(&outputs).unwrap();

        assert!(result.velocity > 0.0 && result.velocity < 10.0);
        assert_relative_eq!(result.velocity, 5.0, epsilon = 1e-9);
        assert_relative_eq!(result.distance, 80.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = resolve(&[]);

        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
    }
}
