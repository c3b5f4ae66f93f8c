//! Output structures for strategy projections

use crate::config::Strategy;
use serde::{Deserialize, Serialize};

/// A single projected period. Currency fields are emitted unrounded;
/// rounding for display is the consumer's concern, never the engine's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Projection period (1-indexed; period 1 is the bootstrap)
    pub period: u32,

    /// Previous period's unrounded end value (0 for the bootstrap)
    pub start_value: f64,

    /// Cash added this period
    pub new_cash: f64,

    /// Always `start_value + new_cash`
    pub total_invested: f64,

    /// Growth earned this period
    pub profit: f64,

    /// Balance after growth, before any withdrawal
    pub after_growth: f64,

    /// Cash withdrawn this period, clamped to available funds
    pub cash_out: f64,

    /// Balance carried into the next period, never negative
    pub end_value: f64,
}

/// Complete projection for one strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyProjection {
    pub strategy: Strategy,
    pub points: Vec<ProjectionPoint>,
}

impl StrategyProjection {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            points: Vec::new(),
        }
    }

    /// Append a projected period
    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Final balance, 0 for an empty projection
    pub fn final_end_value(&self) -> f64 {
        self.points.last().map(|p| p.end_value).unwrap_or(0.0)
    }

    /// Aggregate sums consumers render under the projection table
    pub fn summary(&self) -> ProjectionSummary {
        let total_new_cash: f64 = self.points.iter().map(|p| p.new_cash).sum();
        let total_cash_out: f64 = self.points.iter().map(|p| p.cash_out).sum();
        let total_profit: f64 = self.points.iter().map(|p| p.profit).sum();

        ProjectionSummary {
            strategy: self.strategy.name().to_string(),
            periods: self.points.len() as u32,
            total_new_cash,
            total_cash_out,
            total_profit,
            final_end_value: self.final_end_value(),
            net_cash_flow: total_cash_out - total_new_cash,
        }
    }
}

/// Aggregate view of a strategy projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub strategy: String,
    pub periods: u32,
    pub total_new_cash: f64,
    pub total_cash_out: f64,
    pub total_profit: f64,
    pub final_end_value: f64,
    /// `total_cash_out - total_new_cash`
    pub net_cash_flow: f64,
}
