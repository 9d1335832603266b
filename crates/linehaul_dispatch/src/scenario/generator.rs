use jiff::SignedDuration;
use jiff::civil::Date;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::problem::dispatch_problem::{DispatchProblem, DispatchProblemBuilder};
use crate::problem::dollars::Dollars;
use crate::problem::driver::{Driver, DriverBuilder};
use crate::problem::load::{Load, LoadBuilder};
use crate::problem::location::Location;
use crate::problem::miles::Miles;

/// Default seed for synthetic boards. Kept stable so a regenerated history
/// lines up with an existing one.
pub const DEFAULT_SEED: u64 = 42;

const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
const ENGINE_STREAM: u64 = 0xD1B5_4A32_D192_ED03;

const CHICAGO: usize = 0;
const MEMPHIS: usize = 1;
const NASHVILLE: usize = 2;
const DALLAS: usize = 3;
const ATLANTA: usize = 4;
const ORLANDO: usize = 5;
const ST_LOUIS: usize = 6;
const HOUSTON: usize = 7;
const SUFFOLK: usize = 8;
const CHARLOTTE: usize = 9;

fn network() -> Vec<Location> {
    vec![
        Location::named("Chicago, IL", 41.8781, -87.6298),
        Location::named("Memphis, TN", 35.1495, -90.0490),
        Location::named("Nashville, TN", 36.1627, -86.7816),
        Location::named("Dallas, TX", 32.7767, -96.7970),
        Location::named("Atlanta, GA", 33.7490, -84.3880),
        Location::named("Orlando, FL", 28.5383, -81.3792),
        Location::named("St. Louis, MO", 38.6270, -90.1994),
        Location::named("Houston, TX", 29.7604, -95.3698),
        Location::named("Suffolk, VA", 36.7282, -76.5836),
        Location::named("Charlotte, NC", 35.2271, -80.8431),
    ]
}

fn driver(id: &str, start: usize, target: usize, hours: i64) -> Driver {
    let mut builder = DriverBuilder::default();
    builder
        .set_driver_id(id.to_owned())
        .set_start_location_id(start)
        .set_target_location_id(target)
        .set_available_hours(SignedDuration::from_hours(hours));

    builder.build()
}

fn load(id: &str, origin: usize, destination: usize, payout: f64, miles: f64) -> Load {
    let mut builder = LoadBuilder::default();
    builder
        .set_load_id(id.to_owned())
        .set_origin_id(origin)
        .set_destination_id(destination)
        .set_payout(Dollars::new(payout))
        .set_distance(Miles::new(miles));

    builder.build()
}

/// The fixed demo scenario: six drivers heading home across the eastern
/// half of the network, with an eleven-load board.
pub fn sample_scenario() -> DispatchProblem {
    let drivers = vec![
        driver("D1", CHICAGO, DALLAS, 40),
        driver("D2", ATLANTA, ORLANDO, 38),
        driver("D3", ST_LOUIS, HOUSTON, 45),
        driver("D4", DALLAS, ATLANTA, 36),
        driver("D5", NASHVILLE, MEMPHIS, 42),
        driver("D6", HOUSTON, CHICAGO, 39),
    ];

    let loads = vec![
        load("L101", CHICAGO, MEMPHIS, 1000.0, 500.0),
        load("L102", NASHVILLE, DALLAS, 1800.0, 800.0),
        load("L103", ATLANTA, ORLANDO, 1500.0, 600.0),
        load("L104", ST_LOUIS, HOUSTON, 2000.0, 950.0),
        load("L105", DALLAS, ATLANTA, 1100.0, 550.0),
        load("L106", HOUSTON, ST_LOUIS, 1700.0, 870.0),
        load("L107", MEMPHIS, CHICAGO, 1600.0, 780.0),
        load("L108", ORLANDO, NASHVILLE, 1400.0, 690.0),
        load("L109", CHICAGO, HOUSTON, 2100.0, 990.0),
        load("L110", ATLANTA, MEMPHIS, 1250.0, 560.0),
        load("L111", SUFFOLK, CHARLOTTE, 1950.0, 880.0),
    ];

    let mut builder = DispatchProblemBuilder::default();
    builder
        .set_locations(network())
        .set_drivers(drivers)
        .set_loads(loads);

    builder.build()
}

/// A synthetic board for `date`: the standard roster with jittered weekly
/// hours and `loads_per_day` random loads over the city network. Fully
/// determined by the date and base seed.
pub fn daily_problem(date: Date, loads_per_day: usize, base_seed: u64) -> DispatchProblem {
    let mut rng = SmallRng::seed_from_u64(mix_seed(base_seed, date));
    let locations = network();

    let base_roster = [
        ("D1", CHICAGO, DALLAS, 40),
        ("D2", ATLANTA, ORLANDO, 38),
        ("D3", ST_LOUIS, HOUSTON, 45),
        ("D4", DALLAS, ATLANTA, 36),
        ("D5", NASHVILLE, MEMPHIS, 42),
        ("D6", HOUSTON, CHICAGO, 39),
    ];
    let drivers = base_roster
        .iter()
        .map(|&(id, start, target, hours)| {
            driver(id, start, target, hours + rng.random_range(-4..=4))
        })
        .collect();

    let mut loads = Vec::with_capacity(loads_per_day);
    for i in 0..loads_per_day {
        let origin = rng.random_range(0..locations.len());
        let mut destination = rng.random_range(0..locations.len() - 1);
        if destination >= origin {
            destination += 1;
        }

        // Road miles run a bit over the great-circle distance, and the
        // rate per mile is drawn wide enough that some loads lose money.
        let direct = locations[origin].haversine_miles(&locations[destination]);
        let road = direct * rng.random_range(1.05..1.25);
        let rate = rng.random_range(1.7..2.6);

        loads.push(load(
            &format!("L{i:03}"),
            origin,
            destination,
            (road.value() * rate).round(),
            road.value().round(),
        ));
    }

    let mut builder = DispatchProblemBuilder::default();
    builder
        .set_locations(locations)
        .set_drivers(drivers)
        .set_loads(loads);

    builder.build()
}

/// RNG for the engine's timing draws on `date`, decorrelated from the
/// stream that generated the board itself.
pub fn engine_rng(base_seed: u64, date: Date) -> SmallRng {
    SmallRng::seed_from_u64(mix_seed(base_seed ^ ENGINE_STREAM, date))
}

fn mix_seed(base: u64, date: Date) -> u64 {
    let day_key = (date.year() as i64 as u64) * 10_000
        + (date.month() as u64) * 100
        + (date.day() as u64);

    base ^ day_key.wrapping_mul(SEED_MIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use rand::RngCore;

    #[test]
    fn sample_scenario_matches_the_demo_roster() {
        let problem = sample_scenario();

        assert_eq!(problem.locations().len(), 10);
        assert_eq!(problem.drivers().len(), 6);
        assert_eq!(problem.loads().len(), 11);

        let d1 = &problem.drivers()[0];
        assert_eq!(d1.external_id(), "D1");
        assert_eq!(d1.available_hours(), SignedDuration::from_hours(40));

        let l104 = &problem.loads()[3];
        assert_eq!(l104.external_id(), "L104");
        assert_eq!(l104.payout(), Dollars::new(2000.0));
        assert_eq!(l104.distance(), Miles::new(950.0));
    }

    #[test]
    fn daily_problem_is_reproducible() {
        let day = date(2025, 8, 25);
        let a = daily_problem(day, 60, DEFAULT_SEED);
        let b = daily_problem(day, 60, DEFAULT_SEED);

        assert_eq!(a.loads().len(), 60);
        for (left, right) in a.loads().iter().zip(b.loads().iter()) {
            assert_eq!(left.external_id(), right.external_id());
            assert_eq!(left.origin_id(), right.origin_id());
            assert_eq!(left.destination_id(), right.destination_id());
            assert_eq!(left.payout(), right.payout());
            assert_eq!(left.distance(), right.distance());
        }
    }

    #[test]
    fn different_days_get_different_boards() {
        let a = daily_problem(date(2025, 8, 25), 60, DEFAULT_SEED);
        let b = daily_problem(date(2025, 8, 26), 60, DEFAULT_SEED);

        let board = |problem: &DispatchProblem| {
            problem
                .loads()
                .iter()
                .map(|load| (load.origin_id(), load.destination_id(), load.payout()))
                .collect::<Vec<_>>()
        };
        assert_ne!(board(&a), board(&b));
    }

    #[test]
    fn generated_loads_are_well_formed() {
        use crate::utils::enumerate_idx::EnumerateIdx;

        let problem = daily_problem(date(2025, 8, 25), 120, DEFAULT_SEED);

        for (load_id, load) in problem.loads().iter().enumerate_idx() {
            assert_ne!(load.origin_id(), load.destination_id());
            assert!(load.payout() > Dollars::ZERO);

            // Road miles never undercut the direct line.
            let direct = problem
                .load_origin(load_id)
                .haversine_miles(problem.load_destination(load_id));
            assert!(load.distance() >= direct);
        }
    }

    #[test]
    fn engine_rng_is_seeded_per_date() {
        let day = date(2025, 8, 25);

        let mut a = engine_rng(DEFAULT_SEED, day);
        let mut b = engine_rng(DEFAULT_SEED, day);
        assert_eq!(a.next_u64(), b.next_u64());

        let mut c = engine_rng(DEFAULT_SEED, date(2025, 8, 26));
        assert_ne!(engine_rng(DEFAULT_SEED, day).next_u64(), c.next_u64());
    }
}
