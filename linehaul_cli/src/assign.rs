use std::path::PathBuf;

use clap::Args;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use jiff::civil::Date;
use jiff::tz::TimeZone;
use linehaul_dispatch::history::store::AssignmentHistory;
use linehaul_dispatch::json::scenario_input::JsonScenario;
use linehaul_dispatch::problem::dispatch_problem::DispatchProblem;
use linehaul_dispatch::problem::driver::DriverIdx;
use linehaul_dispatch::scenario::generator;
use linehaul_dispatch::solver::day_plan::DayPlan;
use linehaul_dispatch::solver::dispatch_config::DispatchConfig;
use linehaul_dispatch::solver::engine;
use tracing::{info, warn};

use crate::{file_utils, parsers};

#[derive(Args)]
pub struct AssignArgs {
    /// Scenario file. Defaults to the built-in demo board.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Day to plan, e.g. "2025-08-25". Defaults to today (UTC).
    #[arg(short, long, value_parser = parsers::parse_date)]
    date: Option<Date>,

    /// Seed for the loading/unloading slack draws
    #[arg(long, default_value_t = generator::DEFAULT_SEED)]
    seed: u64,

    /// Delivery SLA override, e.g. "36h" or "PT36H"
    #[arg(long, value_parser = parsers::parse_duration)]
    sla: Option<jiff::SignedDuration>,

    /// Write the planned day as JSON
    #[arg(short, long)]
    latest: Option<PathBuf>,

    /// History file to fold the plan into (idempotent)
    #[arg(long)]
    history: Option<PathBuf>,
}

pub fn run(args: AssignArgs) -> Result<(), anyhow::Error> {
    let date = match args.date {
        Some(date) => date,
        None => jiff::Timestamp::now().to_zoned(TimeZone::UTC).date(),
    };

    let mut config = DispatchConfig::default();
    let problem = match &args.scenario {
        Some(path) => {
            let scenario: JsonScenario = file_utils::read_json(path)?;
            config = scenario.apply_config(&config);

            let (problem, report) = scenario.build_problem();
            if !report.is_clean() {
                warn!(
                    "Scenario dropped records: {} locations, {} drivers, {} loads",
                    report.invalid_locations, report.drivers_skipped, report.loads_skipped
                );
            }

            problem
        }
        None => generator::sample_scenario(),
    };

    if let Some(sla) = args.sla {
        config.delivery_sla = sla;
    }
    config.validate()?;

    let mut rng = generator::engine_rng(args.seed, date);
    let plan = engine::plan_day(&problem, &config, date, &mut rng);

    print_plan(&problem, &plan);

    if let Some(path) = &args.latest {
        file_utils::write_json_pretty(path, &plan)?;
        info!("Wrote latest assignments to {}", path.display());
    }

    if let Some(path) = &args.history {
        let mut history: AssignmentHistory = if path.exists() {
            file_utils::read_json(path)?
        } else {
            AssignmentHistory::new()
        };

        let outcome = history.merge_day(&plan);
        file_utils::write_json_pretty(path, &history)?;
        info!(
            "History {} now holds {} records ({} inserted, {} duplicates skipped)",
            path.display(),
            history.len(),
            outcome.inserted,
            outcome.duplicates
        );
    }

    Ok(())
}

fn print_plan(problem: &DispatchProblem, plan: &DayPlan) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Driver",
            "Load",
            "From",
            "To",
            "Miles",
            "Payout",
            "Fuel",
            "Net",
            "Dispatch",
            "Delivered",
            "On time",
        ]);

    for assignment in &plan.assignments {
        table.add_row(vec![
            assignment.driver_id.clone(),
            assignment.load_id.clone(),
            assignment.origin.clone(),
            assignment.destination.clone(),
            format!("{:.0}", assignment.distance.value()),
            format!("${:.2}", assignment.payout.value()),
            format!("${:.2}", assignment.fuel_cost.value()),
            format!("${:.2}", assignment.net_profit.value()),
            stamp(assignment.dispatch_at),
            stamp(assignment.delivered_at),
            String::from(if assignment.on_time { "yes" } else { "LATE" }),
        ]);
    }

    println!("{table}");

    info!(
        "Planned {}: {} assignments, {:.0} miles, ${:.2} net, {}/{} on time",
        plan.date,
        plan.assignments.len(),
        plan.total_miles().value(),
        plan.total_net_profit().value(),
        plan.on_time_count(),
        plan.assignments.len(),
    );

    if !plan.idle_drivers.is_empty() {
        info!("Idle drivers: {}", driver_names(problem, &plan.idle_drivers));
    }
    if !plan.skipped_drivers.is_empty() {
        warn!(
            "Drivers out of hours: {}",
            driver_names(problem, &plan.skipped_drivers)
        );
    }
}

fn stamp(at: jiff::Timestamp) -> String {
    at.to_zoned(TimeZone::UTC).strftime("%a %H:%M").to_string()
}

fn driver_names(problem: &DispatchProblem, drivers: &[DriverIdx]) -> String {
    drivers
        .iter()
        .map(|&driver_id| problem.driver(driver_id).external_id())
        .collect::<Vec<_>>()
        .join(", ")
}
