//! Historical growth series: per-period balances for a contribution plan

mod generator;
mod series;

pub use generator::generate;
pub use series::{GrowthPoint, GrowthSeries, GrowthSummary};
