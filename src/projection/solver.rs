//! Closed-form solver for the constant periodic contribution that reaches a
//! target balance
//!
//! Used by the custom strategy and exposed for "what contribution hits this
//! target" queries.

use crate::config::Frequency;

/// Solve the future-value-of-ordinary-annuity identity for the constant
/// per-period contribution `C` that grows `start_balance` into
/// `target_amount` over `periods` periods:
///
/// ```text
/// growth_factor = (1+r)^periods
/// C = (target - start * growth_factor) * r / (growth_factor - 1)
/// ```
///
/// A negative result is a required *withdrawal* of that magnitude each
/// period; callers branch on sign rather than clamping.
///
/// Defined boundary values, not errors: returns `0` when `periods == 0` or
/// `start_balance <= 0`, and the degenerate linear solution
/// `(target - start) / periods` when the per-period rate is exactly zero.
pub fn solve_periodic_contribution(
    start_balance: f64,
    target_amount: f64,
    periods: u32,
    annual_rate: f64,
    frequency: Frequency,
) -> f64 {
    if periods == 0 || start_balance <= 0.0 {
        return 0.0;
    }

    let rate = frequency.rate_per_period(annual_rate);
    if rate == 0.0 {
        return (target_amount - start_balance) / periods as f64;
    }

    let growth_factor = (1.0 + rate).powi(periods as i32);
    (target_amount - start_balance * growth_factor) * rate / (growth_factor - 1.0)
}
