//! Historical growth series generation
//!
//! Two growth models selected by contribution frequency: lump-sum investments
//! accrue simple (linear) interest over elapsed months, recurring plans
//! compound per contribution period.

use super::series::{round_currency, GrowthPoint, GrowthSeries};
use crate::config::{ContributionFrequency, DisplayMetric, GrowthConfig};

/// Generate the full series for a configuration. Deterministic, no side
/// effects; a changed configuration regenerates from scratch.
pub fn generate(config: &GrowthConfig) -> GrowthSeries {
    match config.frequency {
        ContributionFrequency::Once => generate_lump_sum(config),
        _ => generate_recurring(config),
    }
}

/// Lump-sum mode: linear growth in elapsed time, monthly points.
/// Interest is simple by design, not compounded per sub-period, and the
/// inflation discount is likewise linear in elapsed months.
fn generate_lump_sum(config: &GrowthConfig) -> GrowthSeries {
    let mut series = GrowthSeries::with_capacity(config.duration_months as usize + 1);

    for i in 0..=config.duration_months {
        let months = i as f64;
        let period_rate = config.annual_rate * months / 12.0;
        let mut value = config.amount * (1.0 + period_rate);
        if config.adjust_for_inflation {
            value *= 1.0 - config.inflation_rate * months / 12.0;
        }
        series.add_point(emit(config, i, config.amount, value));
    }

    series
}

/// Recurring mode: true per-period compounding. Each period contributes
/// first, grows the combined balance, then deflates when inflation is on —
/// the deflation compounds period over period.
fn generate_recurring(config: &GrowthConfig) -> GrowthSeries {
    let periods_per_year = config.frequency.periods_per_year();
    let total_periods = config.duration_months * periods_per_year / 12;
    let rate = config.annual_rate / periods_per_year as f64;
    let deflator = 1.0 + config.inflation_rate / periods_per_year as f64;

    let mut series = GrowthSeries::with_capacity(total_periods as usize + 1);

    // Running accumulators stay unrounded; only emitted points round
    let mut invested = 0.0;
    let mut value = 0.0;
    series.add_point(emit(config, 0, invested, value));

    for i in 1..=total_periods {
        invested += config.amount;
        value = (value + config.amount) * (1.0 + rate);
        if config.adjust_for_inflation {
            value /= deflator;
        }
        series.add_point(emit(config, i, invested, value));
    }

    series
}

/// Emit one rounded point. Profit is derived from the rounded fields so the
/// `profit == current_value - total_invested` invariant holds exactly.
fn emit(config: &GrowthConfig, period: u32, invested: f64, value: f64) -> GrowthPoint {
    let total_invested = round_currency(invested);
    let current_value = round_currency(value);
    let profit = current_value - total_invested;
    let display_value = match config.display_metric {
        DisplayMetric::CurrentValue => current_value,
        DisplayMetric::Profit => profit,
    };

    GrowthPoint {
        period,
        date: config.frequency.date_at(config.start_date, period),
        total_invested,
        current_value,
        profit,
        display_value,
    }
}
