//! Rendering of simulation results.

use crate::runner::SimulatorError;
use queuesim_types::SimulationResult;
use serde::Serialize;
use std::fmt;

const RULE_WIDTH: usize = 60;

/// How reports are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable block per scenario.
    #[default]
    Text,
    /// A JSON array with one object per scenario.
    Json,
}

/// Result of one scenario, labelled for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Display label, the queue's Kendall descriptor by default.
    pub label: String,
    /// The run's result record.
    pub result: SimulationResult,
}

impl ScenarioReport {
    /// Label a result with its queue descriptor.
    pub fn new(result: SimulationResult) -> Self {
        Self {
            label: result.descriptor().to_string(),
            result,
        }
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let result = &self.result;
        let params = &result.parameters;

        writeln!(f, "{heavy}")?;
        writeln!(f, "Report {}", self.label)?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Queue:   {}", result.descriptor())?;
        writeln!(f, "Arrival: {}", params.arrival)?;
        writeln!(f, "Service: {}", params.service)?;
        writeln!(f, "{light}")?;
        for (state, (time, probability)) in result
            .time_in_state
            .iter()
            .zip(&result.probabilities)
            .enumerate()
        {
            writeln!(
                f,
                "State {state:2}: {time:11.4}  |  Probability: {probability:6.2}%"
            )?;
        }
        writeln!(f, "Losses: {}", result.losses)?;
        writeln!(f, "{light}")?;
        writeln!(f, "Global simulation time: {:.4}", result.simulation_time)?;
        writeln!(f, "Mean population: {:.4}", result.avg_population)?;
        writeln!(f, "{heavy}")
    }
}

/// Render every report in the requested format.
pub fn render(reports: &[ScenarioReport], format: OutputFormat) -> Result<String, SimulatorError> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|report| format!("{report}\n"))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queuesim_types::{RunStats, ScenarioParameters, Termination};

    fn sample_report() -> ScenarioReport {
        ScenarioReport::new(SimulationResult {
            parameters: ScenarioParameters::new(2, 2),
            simulation_time: 8.0,
            time_in_state: vec![1.0, 1.0, 6.0],
            probabilities: vec![12.5, 12.5, 75.0],
            losses: 6,
            avg_population: 1.625,
            stats: RunStats {
                events_processed: 8,
                arrivals: 8,
                departures: 0,
                draws: 10,
            },
            termination: Termination::BudgetExhausted,
        })
    }

    #[test]
    fn test_text_layout() {
        let text = sample_report().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Report G/G/2/2");
        assert_eq!(lines[3], "Queue:   G/G/2/2");
        assert_eq!(lines[4], "Arrival: 2.0 ... 5.0");
        assert_eq!(lines[5], "Service: 3.0 ... 5.0");
        assert_eq!(
            lines[7],
            "State  0:      1.0000  |  Probability:  12.50%"
        );
        assert_eq!(
            lines[9],
            "State  2:      6.0000  |  Probability:  75.00%"
        );
        assert!(text.contains("Losses: 6\n"));
        assert!(text.contains("Global simulation time: 8.0000\n"));
        assert!(text.contains("Mean population: 1.6250\n"));
    }

    #[test]
    fn test_render_text_separates_reports() {
        let reports = vec![sample_report(), sample_report()];
        let text = render(&reports, OutputFormat::Text).unwrap();
        assert_eq!(text.matches("Report G/G/2/2").count(), 2);
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&[sample_report()], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["label"], "G/G/2/2");
        assert_eq!(value[0]["result"]["losses"], 6);
        assert_eq!(value[0]["result"]["termination"], "BudgetExhausted");
        assert_eq!(value[0]["result"]["parameters"]["capacity"], 2);
    }
}
