//! Output structures for the historical growth series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Round a currency amount to whole units for emission.
/// Internal accumulators are never rounded.
pub(crate) fn round_currency(value: f64) -> f64 {
    value.round()
}

/// A single point of the historical series, one per period starting at
/// period 0. Points are immutable once emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub period: u32,

    /// Calendar date of this period
    pub date: NaiveDate,

    /// Cumulative invested principal
    pub total_invested: f64,

    /// Balance after growth (and deflation, when enabled)
    pub current_value: f64,

    /// Always `current_value - total_invested`
    pub profit: f64,

    /// Presentation alias of either `current_value` or `profit`,
    /// never an independently computed quantity
    pub display_value: f64,
}

/// Complete historical series for one configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSeries {
    pub points: Vec<GrowthPoint>,
}

impl GrowthSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point
    pub fn add_point(&mut self, point: GrowthPoint) {
        self.points.push(point);
    }

    /// Final balance of the series, 0 for an empty series.
    /// This is the reference balance the custom strategy solves against.
    pub fn final_value(&self) -> f64 {
        self.points.last().map(|p| p.current_value).unwrap_or(0.0)
    }

    /// Summary of the series endpoint
    pub fn summary(&self) -> GrowthSummary {
        let last = self.points.last();
        GrowthSummary {
            periods: self.points.len().saturating_sub(1) as u32,
            total_invested: last.map(|p| p.total_invested).unwrap_or(0.0),
            final_value: last.map(|p| p.current_value).unwrap_or(0.0),
            profit: last.map(|p| p.profit).unwrap_or(0.0),
        }
    }
}

impl Default for GrowthSeries {
    fn default() -> Self {
        Self::new()
    }
}

/// Endpoint summary of a historical series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub periods: u32,
    pub total_invested: f64,
    pub final_value: f64,
    pub profit: f64,
}
