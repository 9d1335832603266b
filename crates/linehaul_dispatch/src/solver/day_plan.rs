use jiff::SignedDuration;
use jiff::civil::Date;
use serde::Serialize;
use smallvec::SmallVec;

use crate::problem::dollars::Dollars;
use crate::problem::driver::DriverIdx;
use crate::problem::load::LoadIdx;
use crate::problem::miles::Miles;
use crate::solver::assignment::Assignment;

/// The loads one driver hauls over a planning day, in dispatch order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverItinerary {
    pub driver: DriverIdx,
    pub loads: SmallVec<[LoadIdx; 4]>,
    pub miles: Miles,
    pub driving_time: SignedDuration,
    pub earnings: Dollars,
}

impl DriverItinerary {
    pub fn new(driver: DriverIdx) -> Self {
        Self {
            driver,
            loads: SmallVec::new(),
            miles: Miles::ZERO,
            driving_time: SignedDuration::ZERO,
            earnings: Dollars::ZERO,
        }
    }

    pub fn push(
        &mut self,
        load: LoadIdx,
        distance: Miles,
        driving_time: SignedDuration,
        net: Dollars,
    ) {
        self.loads.push(load);
        self.miles += distance;
        self.driving_time += driving_time;
        self.earnings += net;
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}

/// The engine's output for one day. `itineraries` always holds one entry
/// per roster driver, in roster order; drivers that hauled nothing appear
/// with an empty itinerary and are listed as idle or skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub date: Date,
    pub assignments: Vec<Assignment>,
    pub itineraries: Vec<DriverItinerary>,
    /// Drivers who were eligible but found no workable load.
    pub idle_drivers: Vec<DriverIdx>,
    /// Drivers who entered the day with no hours left.
    pub skipped_drivers: Vec<DriverIdx>,
}

impl DayPlan {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn total_net_profit(&self) -> Dollars {
        self.assignments.iter().map(|a| a.net_profit).sum()
    }

    pub fn total_miles(&self) -> Miles {
        self.assignments.iter().map(|a| a.distance).sum()
    }

    pub fn on_time_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.on_time).count()
    }
}
