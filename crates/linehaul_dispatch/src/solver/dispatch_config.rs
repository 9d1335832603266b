use jiff::SignedDuration;
use jiff::civil::{Time, Weekday, time};
use thiserror::Error;

use crate::problem::miles::Miles;
use crate::problem::mph::Mph;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Average speed must be positive, got {0} mph")]
    NonPositiveSpeed(f64),

    #[error("Fuel economy must be positive, got {0} mpg")]
    NonPositiveFuelEconomy(f64),

    #[error("Fuel price must not be negative, got {0} $/gal")]
    NegativeFuelPrice(f64),

    #[error("Proximity weight must be finite, got {0}")]
    NonFiniteProximityWeight(f64),

    #[error("Deadhead radius must be positive, got {0} miles")]
    NonPositiveDeadheadRadius(f64),

    #[error("Arrival radius must be positive, got {0} miles")]
    NonPositiveArrivalRadius(f64),

    #[error("Daily driving cap must be positive, got {0:#}")]
    NonPositiveDailyCap(SignedDuration),

    #[error("Delivery SLA must be positive, got {0:#}")]
    NonPositiveSla(SignedDuration),

    #[error("Turnaround buffer must not be negative, got {0:#}")]
    NegativeTurnaroundBuffer(SignedDuration),
}

/// Planning knobs for one dispatch run. Every run gets a full copy, so two
/// scenarios can be planned side by side under different economics.
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// Cruise speed used to turn road miles into driving time.
    pub average_speed: Mph,
    pub miles_per_gallon: f64,
    pub fuel_price_per_gallon: f64,

    /// Dollars credited per mile of progress toward the driver's target.
    pub proximity_weight: f64,

    /// How far a driver may deadhead to reach a load's origin.
    pub deadhead_radius: Miles,
    /// A driver within this distance of their target counts as home.
    pub arrival_radius: Miles,

    pub daily_driving_cap: SignedDuration,
    /// Door-to-door time beyond which a delivery is flagged late.
    pub delivery_sla: SignedDuration,

    /// Civil time of the first dispatch of a planning day, in UTC.
    pub first_dispatch: Time,
    /// Upper bound on the random loading / unloading slack per stop.
    pub turnaround_buffer: SignedDuration,

    pub week_deadline_day: Weekday,
    pub week_deadline_time: Time,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            average_speed: Mph::new(50.0),
            miles_per_gallon: 6.0,
            fuel_price_per_gallon: 4.0,
            proximity_weight: 1.5,
            deadhead_radius: Miles::new(150.0),
            arrival_radius: Miles::new(30.0),
            daily_driving_cap: SignedDuration::from_hours(11),
            delivery_sla: SignedDuration::from_hours(24),
            first_dispatch: time(6, 0, 0, 0),
            turnaround_buffer: SignedDuration::from_mins(45),
            week_deadline_day: Weekday::Sunday,
            week_deadline_time: time(22, 0, 0, 0),
        }
    }
}

impl DispatchConfig {
    /// Rejects configurations the engine cannot plan under. Runs once per
    /// invocation, before any assignment is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speed = self.average_speed.value();
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(speed));
        }

        if !self.miles_per_gallon.is_finite() || self.miles_per_gallon <= 0.0 {
            return Err(ConfigError::NonPositiveFuelEconomy(self.miles_per_gallon));
        }

        if !self.fuel_price_per_gallon.is_finite() || self.fuel_price_per_gallon < 0.0 {
            return Err(ConfigError::NegativeFuelPrice(self.fuel_price_per_gallon));
        }

        if !self.proximity_weight.is_finite() {
            return Err(ConfigError::NonFiniteProximityWeight(self.proximity_weight));
        }

        let deadhead = self.deadhead_radius.value();
        if !deadhead.is_finite() || deadhead <= 0.0 {
            return Err(ConfigError::NonPositiveDeadheadRadius(deadhead));
        }

        let arrival = self.arrival_radius.value();
        if !arrival.is_finite() || arrival <= 0.0 {
            return Err(ConfigError::NonPositiveArrivalRadius(arrival));
        }

        if self.daily_driving_cap <= SignedDuration::ZERO {
            return Err(ConfigError::NonPositiveDailyCap(self.daily_driving_cap));
        }

        if self.delivery_sla <= SignedDuration::ZERO {
            return Err(ConfigError::NonPositiveSla(self.delivery_sla));
        }

        if self.turnaround_buffer < SignedDuration::ZERO {
            return Err(ConfigError::NegativeTurnaroundBuffer(self.turnaround_buffer));
        }

        Ok(())
    }
}
