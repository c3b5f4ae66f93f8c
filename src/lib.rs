//! Growth System - two-stage compound growth and strategy projection engine
//!
//! This library provides:
//! - Historical growth series generation (lump-sum and recurring plans)
//! - A closed-form annuity solver for target-reaching periodic contributions
//! - Forward projection under ten reinvestment/withdrawal strategies
//! - Scenario loading and batch comparison tooling

pub mod config;
pub mod growth;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use config::{
    ContributionFrequency, Frequency, GrowthConfig, ProjectionConfig, Scenario, Strategy,
};
pub use growth::{generate, GrowthPoint, GrowthSeries};
pub use projection::{
    solve_periodic_contribution, ProjectionPoint, StrategyProjection, StrategyProjector,
};
pub use scenario::{ScenarioOutcome, ScenarioRunner};
