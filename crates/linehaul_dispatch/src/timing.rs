use jiff::civil::{Date, Time};
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};
use rand::Rng;
use rand::rngs::SmallRng;

use crate::solver::dispatch_config::DispatchConfig;

/// The instant of `time` on `date`, resolved in UTC. All planner timestamps
/// live on the UTC timeline.
pub fn timestamp_at(date: Date, time: Time) -> Timestamp {
    date.to_datetime(time)
        .to_zoned(TimeZone::UTC)
        .expect("Civil datetime out of range")
        .timestamp()
}

/// The weekly cutoff governing `date`: the next-or-same occurrence of the
/// configured deadline weekday, at the configured deadline time.
pub fn week_deadline_for(date: Date, config: &DispatchConfig) -> Timestamp {
    let mut day = date;
    for _ in 0..7 {
        if day.weekday() == config.week_deadline_day {
            break;
        }
        day = day.tomorrow().expect("Date out of range");
    }

    timestamp_at(day, config.week_deadline_time)
}

/// Dispatch and delivery instants for a leg that starts no earlier than
/// `base` and drives for `driving_time`. Loading and unloading each add a
/// uniform random slack of up to the configured turnaround buffer.
pub fn derive_timestamps(
    base: Timestamp,
    driving_time: SignedDuration,
    config: &DispatchConfig,
    rng: &mut SmallRng,
) -> (Timestamp, Timestamp) {
    let loading = random_slack(config.turnaround_buffer, rng);
    let unloading = random_slack(config.turnaround_buffer, rng);

    let dispatch = base + loading;
    let delivery = dispatch + driving_time + unloading;

    (dispatch, delivery)
}

/// Latest delivery instant `derive_timestamps` could produce for the same
/// leg. Used to test deadline conformance before committing, so the draw
/// itself never has to be rolled back.
pub fn worst_case_delivery(
    base: Timestamp,
    driving_time: SignedDuration,
    config: &DispatchConfig,
) -> Timestamp {
    base + config.turnaround_buffer + driving_time + config.turnaround_buffer
}

/// Door-to-door hours between dispatch and delivery.
pub fn cycle_time_hours(dispatch: Timestamp, delivery: Timestamp) -> f64 {
    delivery.duration_since(dispatch).as_secs_f64() / 3600.0
}

/// A delivery is on time when its cycle time does not exceed the SLA.
/// Landing exactly on the threshold still counts as on time.
pub fn is_on_time(dispatch: Timestamp, delivery: Timestamp, sla: SignedDuration) -> bool {
    delivery.duration_since(dispatch) <= sla
}

fn random_slack(buffer: SignedDuration, rng: &mut SmallRng) -> SignedDuration {
    let secs = buffer.as_secs();
    if secs <= 0 {
        return SignedDuration::ZERO;
    }

    SignedDuration::from_secs(rng.random_range(0..=secs))
}
