//! Load batch scenarios from a CSV file

use super::{ContributionFrequency, Frequency, GrowthConfig, ProjectionConfig, Scenario, Strategy};
use chrono::NaiveDate;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the scenario file columns.
/// Rate columns are percent-denominated, as a user would type them.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_pct: f64,
    #[serde(rename = "DurationMonths")]
    duration_months: u32,
    #[serde(rename = "Frequency")]
    frequency: String,
    #[serde(rename = "StartDate")]
    start_date: NaiveDate,
    #[serde(rename = "InflationPct")]
    inflation_pct: Option<f64>,
    #[serde(rename = "AdjustForInflation")]
    adjust_for_inflation: Option<bool>,
    #[serde(rename = "Strategy")]
    strategy: String,
    #[serde(rename = "StrategyAmount")]
    strategy_amount: Option<f64>,
    #[serde(rename = "ProjectionPeriods")]
    projection_periods: u32,
    #[serde(rename = "ProjectionFrequency")]
    projection_frequency: String,
}

impl CsvRow {
    fn to_scenario(self) -> Result<Scenario, Box<dyn Error>> {
        let frequency: ContributionFrequency = match self.frequency.parse() {
            Ok(f) => f,
            Err(e) => return Err(format!("{}: {}", self.name, e).into()),
        };

        let projection_frequency: Frequency = match self.projection_frequency.parse() {
            Ok(f) => f,
            Err(e) => return Err(format!("{}: {}", self.name, e).into()),
        };

        let strategy = match Strategy::from_parts(&self.strategy, self.strategy_amount) {
            Ok(s) => s,
            Err(e) => return Err(format!("{}: {}", self.name, e).into()),
        };

        // The engine works in decimal fractions; percent stays a file format
        let inflation_rate = self.inflation_pct.unwrap_or(0.0) / 100.0;

        let growth = GrowthConfig {
            inflation_rate,
            adjust_for_inflation: self.adjust_for_inflation.unwrap_or(false),
            ..GrowthConfig::new(
                self.amount,
                self.annual_rate_pct / 100.0,
                self.duration_months,
                frequency,
                self.start_date,
            )
        };

        // Shield-value reads the configured inflation rate whether or not
        // the historical series applies it
        let projection = ProjectionConfig {
            periods: self.projection_periods,
            annual_rate: self.annual_rate_pct / 100.0,
            frequency: projection_frequency,
            shield_inflation_rate: inflation_rate,
        };

        Ok(Scenario {
            name: self.name,
            growth,
            projection,
            strategy,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let scenario = row.to_scenario()?;
        scenario.validate()?;
        scenarios.push(scenario);
    }

    log::debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let scenario = row.to_scenario()?;
        scenario.validate()?;
        scenarios.push(scenario);
    }

    Ok(scenarios)
}
