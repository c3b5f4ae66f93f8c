//! Forward projection: strategy engine, per-period state, annuity solver

mod engine;
mod points;
mod solver;
mod state;

pub use engine::StrategyProjector;
pub use points::{ProjectionPoint, ProjectionSummary, StrategyProjection};
pub use solver::solve_periodic_contribution;
pub use state::ProjectionState;
