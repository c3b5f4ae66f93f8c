//! Growth System CLI
//!
//! Runs the historical growth series for one configuration, then projects it
//! forward under a chosen strategy

use chrono::NaiveDate;
use clap::Parser;
use growth_system::config::{
    ContributionFrequency, DisplayMetric, Frequency, GrowthConfig, ProjectionConfig, Scenario,
    Strategy,
};
use growth_system::ScenarioRunner;
use std::fs::File;
use std::io::Write;

/// Rates are percent-denominated on the command line, matching how people
/// type them; the engine itself works in decimal fractions.
#[derive(Parser, Debug)]
#[command(name = "growth_system", version, about = "Compound growth and strategy projection")]
struct Args {
    /// Invested amount: the lump sum for `once`, the per-period contribution otherwise
    #[arg(long, default_value_t = 1000.0)]
    amount: f64,

    /// Annual growth rate in percent
    #[arg(long, default_value_t = 7.0)]
    rate: f64,

    /// Duration of the historical series in months
    #[arg(long, default_value_t = 120)]
    duration: u32,

    /// Contribution frequency: once, daily, weekly or monthly
    #[arg(long, default_value = "monthly")]
    frequency: ContributionFrequency,

    /// Start date of the series
    #[arg(long, default_value = "2026-01-01")]
    start_date: NaiveDate,

    /// Annual inflation rate in percent (shield-value reads this even when
    /// the series does not adjust for it)
    #[arg(long, default_value_t = 0.0)]
    inflation: f64,

    /// Deflate the historical series by inflation
    #[arg(long)]
    adjust_for_inflation: bool,

    /// Chart profit instead of current value
    #[arg(long)]
    display_profit: bool,

    /// Strategy: 2x, repeat, all-in, double-down, shield-value, level-up,
    /// pay-yourself, capital-protect, take-salary or custom
    #[arg(long, default_value = "repeat")]
    strategy: String,

    /// Strategy parameter: add amount for level-up, withdrawal for
    /// take-salary, target balance for custom
    #[arg(long)]
    strategy_amount: Option<f64>,

    /// Number of forward projection periods
    #[arg(long, default_value_t = 10)]
    periods: u32,

    /// Projection frequency: daily, weekly, monthly or yearly
    #[arg(long, default_value = "yearly")]
    projection_frequency: Frequency,

    /// Write the projection rows to this CSV path
    #[arg(long)]
    output: Option<String>,

    /// Print the full outcome as JSON and exit
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let strategy =
        Strategy::from_parts(&args.strategy, args.strategy_amount).expect("invalid strategy");

    let inflation_rate = args.inflation / 100.0;
    let growth = GrowthConfig {
        inflation_rate,
        adjust_for_inflation: args.adjust_for_inflation,
        display_metric: if args.display_profit {
            DisplayMetric::Profit
        } else {
            DisplayMetric::CurrentValue
        },
        ..GrowthConfig::new(
            args.amount,
            args.rate / 100.0,
            args.duration,
            args.frequency,
            args.start_date,
        )
    };
    growth.validate().expect("invalid growth configuration");

    let projection_config = ProjectionConfig {
        periods: args.periods,
        annual_rate: args.rate / 100.0,
        frequency: args.projection_frequency,
        shield_inflation_rate: inflation_rate,
    };
    projection_config.validate().expect("invalid projection configuration");

    let scenario = Scenario {
        name: "cli".to_string(),
        growth,
        projection: projection_config,
        strategy,
    };

    let outcome = ScenarioRunner::new().run(&scenario);

    if args.json {
        println!("{}", serde_json::to_string(&outcome).expect("serialization failed"));
        return;
    }

    println!("Growth System v0.1.0");
    println!("====================\n");

    println!(
        "Historical series ({} {} periods at {}%/yr):",
        outcome.series.points.len() - 1,
        args.frequency.as_str(),
        args.rate
    );
    println!(
        "{:>6} {:>12} {:>14} {:>14} {:>12}",
        "Period", "Date", "Invested", "Value", "Profit"
    );
    println!("{}", "-".repeat(62));

    // First 24 points to console; the CSV has everything
    for point in outcome.series.points.iter().take(24) {
        println!(
            "{:>6} {:>12} {:>14.0} {:>14.0} {:>12.0}",
            point.period, point.date, point.total_invested, point.current_value, point.profit
        );
    }
    if outcome.series.points.len() > 24 {
        println!("... ({} more periods)", outcome.series.points.len() - 24);
    }

    let growth_summary = outcome.series.summary();
    println!(
        "\nSeries end: invested ${:.0}, value ${:.0}, profit ${:.0}",
        growth_summary.total_invested, growth_summary.final_value, growth_summary.profit
    );

    println!(
        "\nProjection ({} {} periods, strategy {}):",
        args.periods,
        args.projection_frequency.as_str(),
        outcome.projection.strategy.name()
    );
    println!(
        "{:>6} {:>14} {:>12} {:>14} {:>12} {:>12} {:>14}",
        "Period", "Start", "NewCash", "Invested", "Profit", "CashOut", "End"
    );
    println!("{}", "-".repeat(90));

    for point in &outcome.projection.points {
        println!(
            "{:>6} {:>14.2} {:>12.2} {:>14.2} {:>12.2} {:>12.2} {:>14.2}",
            point.period,
            point.start_value,
            point.new_cash,
            point.total_invested,
            point.profit,
            point.cash_out,
            point.end_value
        );
    }

    let summary = outcome.projection.summary();
    println!("\nSummary:");
    println!("  Total new cash: ${:.2}", summary.total_new_cash);
    println!("  Total cash out: ${:.2}", summary.total_cash_out);
    println!("  Total profit:   ${:.2}", summary.total_profit);
    println!("  Net cash flow:  ${:.2}", summary.net_cash_flow);
    println!("  Final balance:  ${:.2}", summary.final_end_value);

    if let Some(path) = args.output {
        let mut file = File::create(&path).expect("Unable to create CSV file");

        writeln!(file, "Period,StartValue,NewCash,TotalInvested,Profit,AfterGrowth,CashOut,EndValue").unwrap();
        for point in &outcome.projection.points {
            writeln!(
                file,
                "{},{:.8},{:.8},{:.8},{:.8},{:.8},{:.8},{:.8}",
                point.period,
                point.start_value,
                point.new_cash,
                point.total_invested,
                point.profit,
                point.after_growth,
                point.cash_out,
                point.end_value,
            )
            .unwrap();
        }

        println!("\nFull projection written to: {}", path);
    }
}
