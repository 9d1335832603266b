use jiff::{SignedDuration, Timestamp};

use crate::problem::dispatch_problem::DispatchProblem;
use crate::problem::driver::DriverIdx;
use crate::problem::location::LocationIdx;
use crate::solver::dispatch_config::DispatchConfig;

/// Mutable per-driver state threaded through one planning day: where the
/// driver is, how much driving budget remains and when they can next be
/// dispatched.
pub struct DriverState {
    driver: DriverIdx,
    location_id: LocationIdx,
    hours_left: SignedDuration,
    driven_today: SignedDuration,
    next_dispatch_base: Timestamp,
    home_bound: bool,
}

impl DriverState {
    pub fn new(
        problem: &DispatchProblem,
        config: &DispatchConfig,
        driver_id: DriverIdx,
        day_start: Timestamp,
    ) -> Self {
        let driver = problem.driver(driver_id);
        let location_id = driver.start_location_id();

        Self {
            driver: driver_id,
            location_id,
            hours_left: driver.available_hours(),
            driven_today: SignedDuration::ZERO,
            next_dispatch_base: day_start,
            home_bound: within_arrival_radius(problem, config, driver_id, location_id),
        }
    }

    pub fn driver(&self) -> DriverIdx {
        self.driver
    }

    pub fn location_id(&self) -> LocationIdx {
        self.location_id
    }

    pub fn hours_left(&self) -> SignedDuration {
        self.hours_left
    }

    pub fn driven_today(&self) -> SignedDuration {
        self.driven_today
    }

    pub fn next_dispatch_base(&self) -> Timestamp {
        self.next_dispatch_base
    }

    /// Once a driver comes within the arrival radius of their target they
    /// stay parked for the rest of the day.
    pub fn is_home_bound(&self) -> bool {
        self.home_bound
    }

    /// Whether a leg of `driving_time` fits both the weekly hours budget
    /// and the daily driving cap.
    pub fn fits(&self, driving_time: SignedDuration, config: &DispatchConfig) -> bool {
        driving_time <= self.hours_left
            && self.driven_today + driving_time <= config.daily_driving_cap
    }

    /// Moves the driver onto a committed load: burn the hours, advance the
    /// position and pick up the next dispatch from the delivery instant.
    pub fn commit(
        &mut self,
        problem: &DispatchProblem,
        config: &DispatchConfig,
        destination_id: LocationIdx,
        driving_time: SignedDuration,
        delivery: Timestamp,
    ) {
        self.hours_left -= driving_time;
        if self.hours_left < SignedDuration::ZERO {
            panic!("Bug: driver {} exceeded the weekly hours budget", self.driver);
        }

        self.driven_today += driving_time;
        if self.driven_today > config.daily_driving_cap {
            panic!("Bug: driver {} exceeded the daily driving cap", self.driver);
        }

        self.location_id = destination_id;
        self.next_dispatch_base = delivery;
        self.home_bound = within_arrival_radius(problem, config, self.driver, destination_id);
    }
}

fn within_arrival_radius(
    problem: &DispatchProblem,
    config: &DispatchConfig,
    driver_id: DriverIdx,
    location_id: LocationIdx,
) -> bool {
    let here = problem.location(location_id);
    let target = problem.driver_target(driver_id);

    here.haversine_miles(target) <= config.arrival_radius
}
