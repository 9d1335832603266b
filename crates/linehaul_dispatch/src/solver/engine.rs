use fxhash::FxHashSet;
use jiff::civil::Date;
use jiff::{SignedDuration, Timestamp};
use rand::rngs::SmallRng;
use tracing::{Level, debug, instrument, warn};

use crate::economics;
use crate::problem::dispatch_problem::DispatchProblem;
use crate::problem::dollars::Dollars;
use crate::problem::load::LoadIdx;
use crate::solver::assignment::Assignment;
use crate::solver::day_plan::{DayPlan, DriverItinerary};
use crate::solver::dispatch_config::DispatchConfig;
use crate::solver::driver_state::DriverState;
use crate::solver::score::CandidateScore;
use crate::timing;
use crate::utils::enumerate_idx::EnumerateIdx;

struct Candidate {
    score: CandidateScore,
    driving_time: SignedDuration,
    fuel: Dollars,
    net: Dollars,
}

/// Plans one dispatch day. Walks the roster in order and greedily assigns
/// each driver load after load until they run out of hours, run out of
/// reachable loads, make it home, or hit the weekly deadline. The result
/// is fully determined by the problem, config, date and RNG seed.
#[instrument(skip_all, level = Level::DEBUG, fields(date = %date))]
pub fn plan_day(
    problem: &DispatchProblem,
    config: &DispatchConfig,
    date: Date,
    rng: &mut SmallRng,
) -> DayPlan {
    let day_start = timing::timestamp_at(date, config.first_dispatch);
    let deadline = timing::week_deadline_for(date, config);

    let mut claimed: FxHashSet<LoadIdx> = FxHashSet::default();
    let mut assignments = Vec::new();
    let mut itineraries = Vec::with_capacity(problem.drivers().len());
    let mut idle_drivers = Vec::new();
    let mut skipped_drivers = Vec::new();

    for (driver_id, driver) in problem.drivers().iter().enumerate_idx() {
        if driver.available_hours() <= SignedDuration::ZERO {
            warn!(
                "Driver {} has no available hours left, skipping",
                driver.external_id()
            );
            skipped_drivers.push(driver_id);
            itineraries.push(DriverItinerary::new(driver_id));
            continue;
        }

        let mut state = DriverState::new(problem, config, driver_id, day_start);
        let mut itinerary = DriverItinerary::new(driver_id);

        while !state.is_home_bound() {
            let Some(candidate) = best_candidate(problem, config, &state, &claimed, deadline)
            else {
                break;
            };

            let load_id = candidate.score.load;
            let load = problem.load(load_id);

            if !claimed.insert(load_id) {
                panic!("Bug: load {load_id} claimed twice");
            }

            let (dispatch, delivery) = timing::derive_timestamps(
                state.next_dispatch_base(),
                candidate.driving_time,
                config,
                rng,
            );
            if delivery > deadline {
                panic!("Bug: committed delivery past the weekly deadline");
            }

            debug!(
                "Driver {} takes load {} ({} -> {}), net {:.2}",
                driver.external_id(),
                load.external_id(),
                problem.load_origin(load_id).describe(),
                problem.load_destination(load_id).describe(),
                candidate.net.value(),
            );

            assignments.push(Assignment {
                date,
                driver_id: driver.external_id().to_owned(),
                load_id: load.external_id().to_owned(),
                origin: problem.load_origin(load_id).describe(),
                destination: problem.load_destination(load_id).describe(),
                distance: load.distance(),
                payout: load.payout(),
                fuel_cost: candidate.fuel,
                net_profit: candidate.net,
                dispatch_at: dispatch,
                delivered_at: delivery,
                cycle_hours: timing::cycle_time_hours(dispatch, delivery),
                on_time: timing::is_on_time(dispatch, delivery, config.delivery_sla),
            });

            itinerary.push(
                load_id,
                load.distance(),
                candidate.driving_time,
                candidate.net,
            );
            state.commit(
                problem,
                config,
                load.destination_id(),
                candidate.driving_time,
                delivery,
            );
        }

        if itinerary.is_empty() {
            debug!("Driver {} ends the day idle", driver.external_id());
            idle_drivers.push(driver_id);
        }
        itineraries.push(itinerary);
    }

    debug!(
        "Planned {} assignments across {} drivers ({} idle, {} skipped)",
        assignments.len(),
        problem.drivers().len(),
        idle_drivers.len(),
        skipped_drivers.len(),
    );

    DayPlan {
        date,
        assignments,
        itineraries,
        idle_drivers,
        skipped_drivers,
    }
}

/// The best conforming load for the driver's current state, or `None` when
/// nothing within deadhead range fits the remaining hours and the weekly
/// deadline. Candidates are rescored from scratch on every call because the
/// driver's position moves with each committed load.
fn best_candidate(
    problem: &DispatchProblem,
    config: &DispatchConfig,
    state: &DriverState,
    claimed: &FxHashSet<LoadIdx>,
    deadline: Timestamp,
) -> Option<Candidate> {
    let position = problem.location(state.location_id());
    let target = problem.driver_target(state.driver());

    let reachable = problem
        .load_origin_index()
        .within_radius(position, config.deadhead_radius);

    reachable
        .into_iter()
        .filter(|load_id| !claimed.contains(load_id))
        .filter_map(|load_id| {
            let load = problem.load(load_id);
            let driving_time = load.distance() / config.average_speed;

            if !state.fits(driving_time, config) {
                return None;
            }

            let latest_delivery =
                timing::worst_case_delivery(state.next_dispatch_base(), driving_time, config);
            if latest_delivery > deadline {
                return None;
            }

            let fuel = economics::fuel_cost(
                load.distance(),
                config.miles_per_gallon,
                config.fuel_price_per_gallon,
            );
            let net = economics::net_profit(load.payout(), fuel);
            let progress = position.progress_toward(target, problem.load_destination(load_id));

            Some(Candidate {
                score: CandidateScore {
                    total: net.value() + config.proximity_weight * progress.value(),
                    payout: load.payout(),
                    distance: load.distance(),
                    load: load_id,
                },
                driving_time,
                fuel,
                net,
            })
        })
        .max_by(|a, b| a.score.cmp(&b.score))
}
