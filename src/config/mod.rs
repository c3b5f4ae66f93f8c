//! Configuration types and scenario loading

mod data;
pub mod loader;

pub use data::{
    ConfigError, ContributionFrequency, DisplayMetric, Frequency, GrowthConfig, ProjectionConfig,
    Scenario, Strategy,
};
pub use loader::{load_scenarios, load_scenarios_from_reader};
