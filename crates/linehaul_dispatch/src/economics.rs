use crate::problem::dollars::Dollars;
use crate::problem::miles::Miles;

/// Fuel burned covering `distance` at the fleet fuel economy, priced at the
/// configured pump rate.
pub fn fuel_cost(distance: Miles, miles_per_gallon: f64, fuel_price_per_gallon: f64) -> Dollars {
    Dollars::new(distance.value() / miles_per_gallon * fuel_price_per_gallon)
}

/// What the carrier keeps from a load after fuel. Negative when fuel costs
/// more than the payout, which the planner still records honestly.
pub fn net_profit(payout: Dollars, fuel: Dollars) -> Dollars {
    payout - fuel
}
