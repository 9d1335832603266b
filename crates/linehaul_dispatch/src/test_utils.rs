use jiff::SignedDuration;
use jiff::civil::{Date, time};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::problem::dispatch_problem::{DispatchProblem, DispatchProblemBuilder};
use crate::problem::dollars::Dollars;
use crate::problem::driver::{Driver, DriverBuilder};
use crate::problem::load::{Load, LoadBuilder};
use crate::problem::location::Location;
use crate::problem::miles::Miles;
use crate::solver::assignment::Assignment;
use crate::solver::day_plan::DayPlan;
use crate::solver::dispatch_config::DispatchConfig;
use crate::timing;

/// Fixed city table shared across tests. Index order matters: tests name
/// cities by position (0 Chicago, 1 Memphis, 2 Nashville, 3 Dallas,
/// 4 Atlanta, 5 St. Louis).
pub fn city_locations() -> Vec<Location> {
    vec![
        Location::named("Chicago, IL", 41.8781, -87.6298),
        Location::named("Memphis, TN", 35.1495, -90.0490),
        Location::named("Nashville, TN", 36.1627, -86.7816),
        Location::named("Dallas, TX", 32.7767, -96.7970),
        Location::named("Atlanta, GA", 33.7490, -84.3880),
        Location::named("St. Louis, MO", 38.6270, -90.1994),
    ]
}

pub fn create_driver(id: &str, start: usize, target: usize, hours: i64) -> Driver {
    let mut builder = DriverBuilder::default();
    builder
        .set_driver_id(id.to_owned())
        .set_start_location_id(start)
        .set_target_location_id(target)
        .set_available_hours(SignedDuration::from_hours(hours));

    builder.build()
}

pub fn create_load(id: &str, origin: usize, destination: usize, payout: f64, miles: f64) -> Load {
    let mut builder = LoadBuilder::default();
    builder
        .set_load_id(id.to_owned())
        .set_origin_id(origin)
        .set_destination_id(destination)
        .set_payout(Dollars::new(payout))
        .set_distance(Miles::new(miles));

    builder.build()
}

pub fn create_test_problem(drivers: Vec<Driver>, loads: Vec<Load>) -> DispatchProblem {
    let mut builder = DispatchProblemBuilder::default();
    builder
        .set_locations(city_locations())
        .set_drivers(drivers)
        .set_loads(loads);

    builder.build()
}

/// Default config with the turnaround buffer zeroed so timestamps come out
/// exact and assertable.
pub fn create_test_config() -> DispatchConfig {
    DispatchConfig {
        turnaround_buffer: SignedDuration::ZERO,
        ..DispatchConfig::default()
    }
}

pub fn test_rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

pub fn create_assignment(date: Date, driver_id: &str, load_id: &str) -> Assignment {
    let dispatch_at = timing::timestamp_at(date, time(6, 0, 0, 0));
    let delivered_at = dispatch_at + SignedDuration::from_hours(10);

    Assignment {
        date,
        driver_id: driver_id.to_owned(),
        load_id: load_id.to_owned(),
        origin: "Chicago, IL".to_owned(),
        destination: "Memphis, TN".to_owned(),
        distance: Miles::new(500.0),
        payout: Dollars::new(1000.0),
        fuel_cost: Dollars::new(333.33),
        net_profit: Dollars::new(666.67),
        dispatch_at,
        delivered_at,
        cycle_hours: 10.0,
        on_time: true,
    }
}

pub fn create_plan(date: Date, assignments: Vec<Assignment>) -> DayPlan {
    DayPlan {
        date,
        assignments,
        itineraries: Vec::new(),
        idle_drivers: Vec::new(),
        skipped_drivers: Vec::new(),
    }
}
