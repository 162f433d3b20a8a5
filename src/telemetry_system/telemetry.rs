use crate::takeoff_system::kernel::AggregatedDistanceOutput;
use crate::takeoff_system::resolver::BalancedFieldLength;

pub struct SweepTelemetry {
    pub rows: Vec<String>,
    shortest_continued: f64,
    longest_continued: f64,
    shortest_aborted: f64,
    longest_aborted: f64,
}

impl SweepTelemetry {
    pub fn new() -> Self {
        SweepTelemetry {
            rows: Vec::new(),
            shortest_continued: f64::MAX,
            longest_continued: 0.0,
            shortest_aborted: f64::MAX,
            longest_aborted: 0.0,
        }
    }

    fn format_distance(distance: f64) -> String {
        if distance >= 1000.0 {
            format!("{:.2} km", distance / 1000.0)
        } else {
            format!("{:.2} m", distance)
        }
    }

    pub fn collect_data(&mut self, output: &AggregatedDistanceOutput) {
        if output.continued_takeoff_distance < self.shortest_continued {
            self.shortest_continued = output.continued_takeoff_distance;
        }
        if output.continued_takeoff_distance > self.longest_continued {
            self.longest_continued = output.continued_takeoff_distance;
        }
        if output.aborted_takeoff_distance < self.shortest_aborted {
            self.shortest_aborted = output.aborted_takeoff_distance;
        }
        if output.aborted_takeoff_distance > self.longest_aborted {
            self.longest_aborted = output.aborted_takeoff_distance;
        }

        self.rows.push(format!(
            "{:.1};{:.2};{:.2}",
            output.failure_speed,
            output.continued_takeoff_distance,
            output.aborted_takeoff_distance
        ));
    }

    pub fn display_data(&self, result: &BalancedFieldLength) {
        println!("--- Failure Speed Sweep ---");
        println!("failure speed [m/s];continued takeoff [m];aborted takeoff [m]");
        for row in &self.rows {
            println!("{}", row);
        }
        println!("--- End of Sweep ---");

        println!("\n--- Sweep Summary ---");
        println!(
            "Continued takeoff: {} .. {}",
            Self::format_distance(self.shortest_continued),
            Self::format_distance(self.longest_continued)
        );
        println!(
            "Aborted takeoff:   {} .. {}",
            Self::format_distance(self.shortest_aborted),
            Self::format_distance(self.longest_aborted)
        );

        if result.is_resolved() {
            println!(
                "\nBalanced field length: {} at a failure speed of {:.2} m/s",
                Self::format_distance(result.distance),
                result.velocity
            );
        } else {
            println!("\nNo crossing found inside the swept failure speeds.");
        }
    }
}

impl Default for SweepTelemetry {
    fn default() -> Self {
        Self::new()
    }
}
