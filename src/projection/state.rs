//! Per-period state carried through a strategy projection

use super::points::ProjectionPoint;

/// Running state between projection periods. The balance is the unrounded
/// end value of the last period — display rounding must never reach it, or
/// compounding error accumulates over long horizons.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Last completed period (0 before the bootstrap)
    pub period: u32,

    /// Unrounded balance carried into the next period
    pub balance: f64,

    /// Profit realized in the last completed period, consumed by the
    /// double-down rule
    pub previous_profit: f64,
}

impl ProjectionState {
    /// State before any period has run
    pub fn new() -> Self {
        Self {
            period: 0,
            balance: 0.0,
            previous_profit: 0.0,
        }
    }

    /// Fold one completed period into the state
    pub fn advance(&mut self, point: &ProjectionPoint) {
        self.period = point.period;
        self.balance = point.end_value;
        self.previous_profit = point.profit;
    }
}

impl Default for ProjectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_carries_end_value_and_profit() {
        let mut state = ProjectionState::new();
        assert_eq!(state.balance, 0.0);

        let point = ProjectionPoint {
            period: 1,
            start_value: 0.0,
            new_cash: 1000.0,
            total_invested: 1000.0,
            profit: 100.0,
            after_growth: 1100.0,
            cash_out: 0.0,
            end_value: 1100.0,
        };
        state.advance(&point);

        assert_eq!(state.period, 1);
        assert_eq!(state.balance, 1100.0);
        assert_eq!(state.previous_profit, 100.0);
    }
}
