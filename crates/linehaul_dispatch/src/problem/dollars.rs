use std::{
    iter::Sum,
    ops::{Add, AddAssign, Mul, Sub},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// US dollars. Payouts, fuel costs and profits all carry this type so that
/// money never gets mixed with distances in score arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Dollars(f64);

impl Dollars {
    pub const ZERO: Dollars = Dollars(0.0);

    pub fn new(value: f64) -> Self {
        Dollars(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Eq for Dollars {}

impl PartialOrd for Dollars {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dollars {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.partial_cmp(&other.0).unwrap()
    }
}

impl From<f64> for Dollars {
    fn from(value: f64) -> Self {
        Dollars::new(value)
    }
}

impl Add for Dollars {
    type Output = Dollars;

    fn add(self, other: Dollars) -> Dollars {
        Dollars(self.0 + other.0)
    }
}

impl AddAssign for Dollars {
    fn add_assign(&mut self, other: Dollars) {
        self.0 += other.0;
    }
}

impl Sub for Dollars {
    type Output = Dollars;

    fn sub(self, other: Dollars) -> Dollars {
        Dollars(self.0 - other.0)
    }
}

impl Mul<f64> for Dollars {
    type Output = Dollars;

    fn mul(self, factor: f64) -> Dollars {
        Dollars(self.0 * factor)
    }
}

impl Sum for Dollars {
    fn sum<I: Iterator<Item = Dollars>>(iter: I) -> Dollars {
        iter.fold(Dollars::ZERO, |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profit_is_payout_minus_cost() {
        let net = Dollars::new(1000.0) - Dollars::new(333.33);
        assert!((net.value() - 666.67).abs() < 1e-9);
    }

    #[test]
    fn orders_by_amount() {
        assert!(Dollars::new(1800.0) > Dollars::new(1500.0));
        assert!(Dollars::ZERO < Dollars::new(0.01));
    }
}
