//! Scenario runner wiring the historical series into the forward projector
//!
//! The historical series' final value becomes the projector's starting
//! balance, while the configured investment amount rides along as the
//! original principal the bootstrap and the repeat/capital-protect rules use.

use crate::config::{Scenario, Strategy};
use crate::growth::{generate, GrowthSeries};
use crate::projection::{StrategyProjection, StrategyProjector};
use serde::Serialize;

/// Both stages' output for one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub series: GrowthSeries,
    pub projection: StrategyProjection,
}

/// Runs scenarios end to end
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a single scenario: generate the series, then project its final
    /// value under the scenario's strategy
    pub fn run(&self, scenario: &Scenario) -> ScenarioOutcome {
        let series = generate(&scenario.growth);
        let projector = StrategyProjector::new(scenario.projection.clone());
        let projection =
            projector.project(&scenario.strategy, series.final_value(), scenario.growth.amount);

        log::debug!(
            "scenario {}: {} growth points, {} projected periods",
            scenario.name,
            series.points.len(),
            projection.points.len()
        );

        ScenarioOutcome {
            scenario: scenario.clone(),
            series,
            projection,
        }
    }

    /// Run many scenarios with the same runner
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        scenarios.iter().map(|s| self.run(s)).collect()
    }

    /// Compare strategies on one configuration. The historical series is
    /// generated once and shared across every projection.
    pub fn run_strategies(
        &self,
        scenario: &Scenario,
        strategies: &[Strategy],
    ) -> Vec<ScenarioOutcome> {
        let series = generate(&scenario.growth);
        let projector = StrategyProjector::new(scenario.projection.clone());

        strategies
            .iter()
            .map(|strategy| {
                let projection =
                    projector.project(strategy, series.final_value(), scenario.growth.amount);
                ScenarioOutcome {
                    scenario: Scenario {
                        strategy: *strategy,
                        ..scenario.clone()
                    },
                    series: series.clone(),
                    projection,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContributionFrequency, Frequency, GrowthConfig, ProjectionConfig};
    use crate::projection::solve_periodic_contribution;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn test_scenario(strategy: Strategy) -> Scenario {
        Scenario {
            name: "test".to_string(),
            growth: GrowthConfig::new(
                1000.0,
                0.10,
                12,
                ContributionFrequency::Monthly,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ),
            projection: ProjectionConfig {
                periods: 10,
                annual_rate: 0.10,
                frequency: Frequency::Yearly,
                shield_inflation_rate: 0.02,
            },
            strategy,
        }
    }

    #[test]
    fn test_run_feeds_series_final_value_to_custom_solve() {
        let scenario = test_scenario(Strategy::Custom { target: 50_000.0 });
        let outcome = ScenarioRunner::new().run(&scenario);

        let expected = solve_periodic_contribution(
            outcome.series.final_value(),
            50_000.0,
            10,
            0.10,
            Frequency::Yearly,
        );
        assert_relative_eq!(outcome.projection.points[1].new_cash, expected, epsilon = 1e-6);

        // The bootstrap still injects the configured amount, not the
        // compounded series value
        assert_eq!(outcome.projection.points[0].new_cash, 1000.0);
    }

    #[test]
    fn test_run_strategies_shares_one_series() {
        let scenario = test_scenario(Strategy::AllIn);
        let strategies = Strategy::all(500.0, 200.0, 20_000.0);
        let outcomes = ScenarioRunner::new().run_strategies(&scenario, &strategies);

        assert_eq!(outcomes.len(), 10);
        for outcome in &outcomes {
            assert_eq!(outcome.series.final_value(), outcomes[0].series.final_value());
            // Bootstrap is strategy-independent
            assert_eq!(
                outcome.projection.points[0].end_value,
                outcomes[0].projection.points[0].end_value
            );
        }
    }

    #[test]
    fn test_run_batch_produces_one_outcome_each() {
        let scenarios = vec![
            test_scenario(Strategy::AllIn),
            test_scenario(Strategy::Repeat),
        ];
        let outcomes = ScenarioRunner::new().run_batch(&scenarios);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[1].projection.strategy, Strategy::Repeat);
    }
}
