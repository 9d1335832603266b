use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::problem::dollars::Dollars;
use crate::problem::miles::Miles;

/// One committed driver-load pairing, fully priced and timed. This is the
/// durable record: it round-trips through the history file, so its field
/// names are part of the on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub date: Date,
    pub driver_id: String,
    pub load_id: String,
    pub origin: String,
    pub destination: String,
    pub distance: Miles,
    pub payout: Dollars,
    pub fuel_cost: Dollars,
    pub net_profit: Dollars,
    pub dispatch_at: Timestamp,
    pub delivered_at: Timestamp,
    pub cycle_hours: f64,
    pub on_time: bool,
}
