//! Run every scenario in a CSV batch file and summarize the results
//!
//! Usage: run_scenarios [scenarios.csv]

use growth_system::config::load_scenarios;
use growth_system::ScenarioRunner;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "scenarios.csv".to_string());

    let start = Instant::now();
    println!("Loading scenarios from {}...", path);

    let scenarios = load_scenarios(&path).expect("Failed to load scenarios");
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let run_start = Instant::now();
    let runner = ScenarioRunner::new();

    // Scenarios are independent; run them in parallel
    let outcomes: Vec<_> = scenarios
        .par_iter()
        .map(|scenario| runner.run(scenario))
        .collect();

    println!("Ran {} scenarios in {:?}", outcomes.len(), run_start.elapsed());

    println!(
        "\n{:>16} {:>16} {:>14} {:>14} {:>14} {:>14}",
        "Scenario", "Strategy", "GrownValue", "NewCash", "CashOut", "FinalBalance"
    );
    println!("{}", "-".repeat(94));

    for outcome in &outcomes {
        let summary = outcome.projection.summary();
        println!(
            "{:>16} {:>16} {:>14.0} {:>14.2} {:>14.2} {:>14.2}",
            outcome.scenario.name,
            summary.strategy,
            outcome.series.final_value(),
            summary.total_new_cash,
            summary.total_cash_out,
            summary.final_end_value,
        );
    }

    let csv_path = "scenario_results.csv";
    let mut file = File::create(csv_path).expect("Failed to create output file");

    writeln!(file, "Scenario,Strategy,GrownValue,TotalNewCash,TotalCashOut,TotalProfit,NetCashFlow,FinalBalance").unwrap();
    for outcome in &outcomes {
        let summary = outcome.projection.summary();
        writeln!(
            file,
            "{},{},{:.8},{:.8},{:.8},{:.8},{:.8},{:.8}",
            outcome.scenario.name,
            summary.strategy,
            outcome.series.final_value(),
            summary.total_new_cash,
            summary.total_cash_out,
            summary.total_profit,
            summary.net_cash_flow,
            summary.final_end_value,
        )
        .unwrap();
    }

    println!("\nResults written to {}", csv_path);
    println!("Total time: {:?}", start.elapsed());
}
