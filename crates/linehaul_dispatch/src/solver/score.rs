use std::cmp::Ordering;

use crate::problem::dollars::Dollars;
use crate::problem::load::LoadIdx;
use crate::problem::miles::Miles;

/// Ranking key for one candidate load from a driver's current position.
/// `total` is the load's net profit plus its weighted progress toward the
/// driver's target. Ordered so the greatest element is the load the driver
/// takes: ties fall back to the higher payout, then the shorter haul, then
/// the lower load index, so selection never depends on input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    pub total: f64,
    pub payout: Dollars,
    pub distance: Miles,
    pub load: LoadIdx,
}

impl Eq for CandidateScore {}

impl PartialOrd for CandidateScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CandidateScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total
            .total_cmp(&other.total)
            .then_with(|| self.payout.cmp(&other.payout))
            .then_with(|| other.distance.cmp(&self.distance))
            .then_with(|| other.load.cmp(&self.load))
    }
}
