use std::{
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Sub, SubAssign},
};

use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::mph::Mph;

/// Statute miles. All distances in the planner are expressed in this unit.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Miles(f64);

impl Miles {
    pub const ZERO: Miles = Miles(0.0);

    pub fn new(value: f64) -> Self {
        Miles(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Eq for Miles {}

impl PartialOrd for Miles {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Miles {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.partial_cmp(&other.0).unwrap()
    }
}

impl From<f64> for Miles {
    fn from(value: f64) -> Self {
        Miles::new(value)
    }
}

impl Add for Miles {
    type Output = Miles;

    fn add(self, other: Miles) -> Miles {
        Miles(self.0 + other.0)
    }
}

impl AddAssign for Miles {
    fn add_assign(&mut self, other: Miles) {
        self.0 += other.0;
    }
}

impl Sub for Miles {
    type Output = Miles;

    fn sub(self, other: Miles) -> Miles {
        Miles(self.0 - other.0)
    }
}

impl SubAssign for Miles {
    fn sub_assign(&mut self, other: Miles) {
        self.0 -= other.0;
    }
}

/// Driving time implied by covering this distance at the given cruise speed.
impl Div<Mph> for Miles {
    type Output = SignedDuration;

    fn div(self, speed: Mph) -> SignedDuration {
        let seconds = self.0 / speed.value() * 3600.0;
        SignedDuration::from_secs_f64(seconds)
    }
}

impl Div<Miles> for Miles {
    type Output = f64;

    fn div(self, other: Miles) -> f64 {
        self.0 / other.0
    }
}

impl Mul<f64> for Miles {
    type Output = Miles;

    fn mul(self, factor: f64) -> Miles {
        Miles(self.0 * factor)
    }
}

impl Sum for Miles {
    fn sum<I: Iterator<Item = Miles>>(iter: I) -> Miles {
        iter.fold(Miles::ZERO, |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_by_speed_into_driving_time() {
        let duration = Miles::new(500.0) / Mph::new(50.0);
        assert_eq!(duration, SignedDuration::from_hours(10));
    }

    #[test]
    fn orders_by_magnitude() {
        let mut distances = vec![Miles::new(870.0), Miles::ZERO, Miles::new(500.0)];
        distances.sort();
        assert_eq!(
            distances,
            vec![Miles::ZERO, Miles::new(500.0), Miles::new(870.0)]
        );
    }

    #[test]
    fn sums_over_an_itinerary() {
        let total: Miles = [Miles::new(500.0), Miles::new(780.0)].into_iter().sum();
        assert_eq!(total, Miles::new(1280.0));
    }
}
