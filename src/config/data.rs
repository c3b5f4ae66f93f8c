//! Input configuration for growth series and strategy projections

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cadence at which new principal enters the historical series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionFrequency {
    /// Single lump-sum investment at period 0
    Once,
    Daily,
    Weekly,
    Monthly,
}

impl ContributionFrequency {
    /// Number of emitted periods per year.
    /// Lump-sum series are emitted at monthly points, so `Once` maps to 12.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            ContributionFrequency::Once => 12,
            ContributionFrequency::Daily => 365,
            ContributionFrequency::Weekly => 52,
            ContributionFrequency::Monthly => 12,
        }
    }

    /// Date of period `i`, stepping from `start` by whole calendar units.
    /// Month steps clamp to the end of shorter months (Jan 31 -> Feb 28/29).
    pub fn date_at(&self, start: NaiveDate, i: u32) -> NaiveDate {
        match self {
            ContributionFrequency::Once | ContributionFrequency::Monthly => {
                start + Months::new(i)
            }
            ContributionFrequency::Weekly => start + Days::new(7 * i as u64),
            ContributionFrequency::Daily => start + Days::new(i as u64),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionFrequency::Once => "once",
            ContributionFrequency::Daily => "daily",
            ContributionFrequency::Weekly => "weekly",
            ContributionFrequency::Monthly => "monthly",
        }
    }
}

impl std::str::FromStr for ContributionFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "once" => Ok(ContributionFrequency::Once),
            "daily" => Ok(ContributionFrequency::Daily),
            "weekly" => Ok(ContributionFrequency::Weekly),
            "monthly" => Ok(ContributionFrequency::Monthly),
            other => Err(format!("Unknown contribution frequency: {}", other)),
        }
    }
}

/// Cadence of the forward projector and the contribution solver,
/// independent of the historical series' contribution frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Daily => 365,
            Frequency::Weekly => 52,
            Frequency::Monthly => 12,
            Frequency::Yearly => 1,
        }
    }

    /// Convert an annual rate to a per-period rate by straight division
    /// (the yearly mapping is the identity)
    pub fn rate_per_period(&self, annual_rate: f64) -> f64 {
        annual_rate / self.periods_per_year() as f64
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(format!("Unknown projection frequency: {}", other)),
        }
    }
}

/// Which series value the presentation layer charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMetric {
    #[default]
    CurrentValue,
    Profit,
}

/// Reinvestment/withdrawal strategy applied by the forward projector
/// from period 2 onward. Exactly one variant is active per projection;
/// parameters live on the variant that uses them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    /// Add new cash equal to the running balance each period
    TwoX,
    /// Add the original principal again each period
    Repeat,
    /// No cash in, no cash out; balance rides the rate
    AllIn,
    /// Reinvest the previous period's profit as new cash
    DoubleDown,
    /// Add enough new cash to offset inflation on the balance
    ShieldValue,
    /// Add a fixed amount each period
    LevelUp { amount: f64 },
    /// Withdraw half of each period's profit
    PayYourself,
    /// Withdraw everything above the original principal plus its interest,
    /// holding the balance at the principal
    CapitalProtect,
    /// Withdraw a fixed salary each period, capped at available funds
    TakeSalary { salary: f64 },
    /// Contribute or withdraw the solved constant amount that lands on a
    /// target balance at the end of the projection
    Custom { target: f64 },
}

impl Strategy {
    /// Canonical spelling used by the CLI, the scenario CSV, and output tables
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::TwoX => "2x",
            Strategy::Repeat => "repeat",
            Strategy::AllIn => "all-in",
            Strategy::DoubleDown => "double-down",
            Strategy::ShieldValue => "shield-value",
            Strategy::LevelUp { .. } => "level-up",
            Strategy::PayYourself => "pay-yourself",
            Strategy::CapitalProtect => "capital-protect",
            Strategy::TakeSalary { .. } => "take-salary",
            Strategy::Custom { .. } => "custom",
        }
    }

    /// Build a strategy from its spelling and an optional parameter.
    /// `level-up`, `take-salary` and `custom` require the parameter; the
    /// other variants reject a stray one silently (it is simply unused).
    pub fn from_parts(kind: &str, amount: Option<f64>) -> Result<Self, String> {
        match kind {
            "2x" => Ok(Strategy::TwoX),
            "repeat" => Ok(Strategy::Repeat),
            "all-in" => Ok(Strategy::AllIn),
            "double-down" => Ok(Strategy::DoubleDown),
            "shield-value" => Ok(Strategy::ShieldValue),
            "level-up" => match amount {
                Some(amount) => Ok(Strategy::LevelUp { amount }),
                None => Err("level-up requires a fixed add amount".to_string()),
            },
            "pay-yourself" => Ok(Strategy::PayYourself),
            "capital-protect" => Ok(Strategy::CapitalProtect),
            "take-salary" => match amount {
                Some(salary) => Ok(Strategy::TakeSalary { salary }),
                None => Err("take-salary requires a fixed withdrawal amount".to_string()),
            },
            "custom" => match amount {
                Some(target) => Ok(Strategy::Custom { target }),
                None => Err("custom requires a target balance".to_string()),
            },
            other => Err(format!("Unknown strategy: {}", other)),
        }
    }

    /// All ten variants with the given parameters, for side-by-side comparisons
    pub fn all(level_up_amount: f64, salary: f64, target: f64) -> Vec<Strategy> {
        vec![
            Strategy::TwoX,
            Strategy::Repeat,
            Strategy::AllIn,
            Strategy::DoubleDown,
            Strategy::ShieldValue,
            Strategy::LevelUp { amount: level_up_amount },
            Strategy::PayYourself,
            Strategy::CapitalProtect,
            Strategy::TakeSalary { salary },
            Strategy::Custom { target },
        ]
    }
}

/// Validation failures surfaced before the engine runs.
/// The core formulas assume well-formed input; callers validate up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("amount must be a finite number, got {0}")]
    NonFiniteAmount(f64),
    #[error("rate must be a finite number, got {0}")]
    NonFiniteRate(f64),
    #[error("per-period rate must be above -100%, got {0}")]
    RateBelowFloor(f64),
    #[error("projection must cover at least one period")]
    ZeroPeriods,
    #[error("strategy parameter must be a finite number, got {0}")]
    NonFiniteStrategyParam(f64),
}

/// Inputs for the historical growth series. Immutable per computation; a
/// changed configuration means a full regeneration, never an incremental
/// patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Invested amount: the lump sum for `Once`, the per-period
    /// contribution for recurring frequencies
    pub amount: f64,

    /// Annual growth rate as a decimal fraction (0.10 = 10%)
    pub annual_rate: f64,

    /// Total duration in months
    pub duration_months: u32,

    /// Contribution cadence
    pub frequency: ContributionFrequency,

    /// Calendar date of period 0
    pub start_date: NaiveDate,

    /// Configured annual inflation rate as a decimal fraction. Read by the
    /// shield-value strategy even when `adjust_for_inflation` is off.
    pub inflation_rate: f64,

    /// Whether the historical series deflates values by inflation
    pub adjust_for_inflation: bool,

    /// Which value `display_value` aliases on emitted points
    pub display_metric: DisplayMetric,
}

impl GrowthConfig {
    pub fn new(
        amount: f64,
        annual_rate: f64,
        duration_months: u32,
        frequency: ContributionFrequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            annual_rate,
            duration_months,
            frequency,
            start_date,
            inflation_rate: 0.0,
            adjust_for_inflation: false,
            display_metric: DisplayMetric::default(),
        }
    }

    /// Per-period growth rate for recurring frequencies
    pub fn rate_per_period(&self) -> f64 {
        self.annual_rate / self.frequency.periods_per_year() as f64
    }

    /// Reject inputs the formulas are undefined for
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.amount.is_finite() {
            return Err(ConfigError::NonFiniteAmount(self.amount));
        }
        if !self.annual_rate.is_finite() {
            return Err(ConfigError::NonFiniteRate(self.annual_rate));
        }
        if !self.inflation_rate.is_finite() {
            return Err(ConfigError::NonFiniteRate(self.inflation_rate));
        }
        if self.rate_per_period() <= -1.0 {
            return Err(ConfigError::RateBelowFloor(self.rate_per_period()));
        }
        Ok(())
    }
}

/// Inputs for the forward strategy projector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of projection periods, including the bootstrap period
    pub periods: u32,

    /// Annual growth rate as a decimal fraction
    pub annual_rate: f64,

    /// Projection cadence
    pub frequency: Frequency,

    /// Inflation rate used by the shield-value strategy, sourced from the
    /// configured inflation rate regardless of the historical series'
    /// inflation toggle
    pub shield_inflation_rate: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            periods: 10,
            annual_rate: 0.07,
            frequency: Frequency::Yearly,
            shield_inflation_rate: 0.0,
        }
    }
}

impl ProjectionConfig {
    /// Per-period growth rate applied by every strategy rule
    pub fn rate_per_period(&self) -> f64 {
        self.frequency.rate_per_period(self.annual_rate)
    }

    /// Reject inputs the formulas are undefined for
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.periods == 0 {
            return Err(ConfigError::ZeroPeriods);
        }
        if !self.annual_rate.is_finite() {
            return Err(ConfigError::NonFiniteRate(self.annual_rate));
        }
        if !self.shield_inflation_rate.is_finite() {
            return Err(ConfigError::NonFiniteRate(self.shield_inflation_rate));
        }
        if self.rate_per_period() <= -1.0 {
            return Err(ConfigError::RateBelowFloor(self.rate_per_period()));
        }
        Ok(())
    }
}

/// A named pairing of growth inputs, projection inputs and a strategy,
/// as loaded from the scenario CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub growth: GrowthConfig,
    pub projection: ProjectionConfig,
    pub strategy: Strategy,
}

impl Scenario {
    /// Validate both halves plus the strategy parameter
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.growth.validate()?;
        self.projection.validate()?;
        let param = match self.strategy {
            Strategy::LevelUp { amount } => amount,
            Strategy::TakeSalary { salary } => salary,
            Strategy::Custom { target } => target,
            _ => 0.0,
        };
        if !param.is_finite() {
            return Err(ConfigError::NonFiniteStrategyParam(param));
        }
        Ok(())
    }
}
