use fxhash::FxHashSet;
use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::problem::dispatch_problem::{DispatchProblem, DispatchProblemBuilder};
use crate::problem::dollars::Dollars;
use crate::problem::driver::DriverBuilder;
use crate::problem::load::LoadBuilder;
use crate::problem::location::Location;
use crate::problem::miles::Miles;
use crate::problem::mph::Mph;
use crate::solver::dispatch_config::DispatchConfig;

/// Scenario file for one planning run: the location table, the driver
/// roster and the load board, plus optional config overrides.
#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Scenario")]
pub struct JsonScenario {
    pub config: Option<JsonConfigOverrides>,
    pub locations: Vec<JsonLocation>,
    pub drivers: Vec<JsonDriver>,
    pub loads: Vec<JsonLoad>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Location")]
pub struct JsonLocation {
    pub name: Option<String>,
    /// `[lon, lat]`, GeoJSON order.
    pub coordinates: [f64; 2],
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Driver")]
pub struct JsonDriver {
    pub id: String,
    pub start_location_id: usize,
    pub target_location_id: usize,
    /// Remaining weekly driving budget, in hours.
    pub available_hours: f64,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Load")]
pub struct JsonLoad {
    pub id: String,
    pub origin_id: usize,
    pub destination_id: usize,
    pub payout: f64,
    /// Billable road miles. Defaults to the great-circle distance between
    /// the endpoints when omitted.
    pub miles: Option<f64>,
}

#[derive(Serialize, Deserialize, JsonSchema, Default)]
#[serde(deny_unknown_fields, rename = "ConfigOverrides")]
pub struct JsonConfigOverrides {
    pub average_speed_mph: Option<f64>,
    pub miles_per_gallon: Option<f64>,
    pub fuel_price_per_gallon: Option<f64>,
    pub proximity_weight: Option<f64>,
    pub deadhead_radius_miles: Option<f64>,
    pub arrival_radius_miles: Option<f64>,
    pub daily_driving_cap: Option<SignedDuration>,
    pub delivery_sla: Option<SignedDuration>,
    pub turnaround_buffer: Option<SignedDuration>,
}

/// What intake kept and what it dropped. Skipped records are already
/// logged; the counts let callers surface a summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntakeReport {
    pub invalid_locations: usize,
    pub drivers_accepted: usize,
    pub drivers_skipped: usize,
    pub loads_accepted: usize,
    pub loads_skipped: usize,
}

impl IntakeReport {
    pub fn is_clean(&self) -> bool {
        self.invalid_locations == 0 && self.drivers_skipped == 0 && self.loads_skipped == 0
    }
}

impl JsonScenario {
    /// The file's overrides applied on top of `base`. Fields the file does
    /// not mention keep their base values.
    pub fn apply_config(&self, base: &DispatchConfig) -> DispatchConfig {
        let mut config = base.clone();

        let Some(overrides) = &self.config else {
            return config;
        };

        if let Some(speed) = overrides.average_speed_mph {
            config.average_speed = Mph::new(speed);
        }
        if let Some(mpg) = overrides.miles_per_gallon {
            config.miles_per_gallon = mpg;
        }
        if let Some(price) = overrides.fuel_price_per_gallon {
            config.fuel_price_per_gallon = price;
        }
        if let Some(weight) = overrides.proximity_weight {
            config.proximity_weight = weight;
        }
        if let Some(radius) = overrides.deadhead_radius_miles {
            config.deadhead_radius = Miles::new(radius);
        }
        if let Some(radius) = overrides.arrival_radius_miles {
            config.arrival_radius = Miles::new(radius);
        }
        if let Some(cap) = overrides.daily_driving_cap {
            config.daily_driving_cap = cap;
        }
        if let Some(sla) = overrides.delivery_sla {
            config.delivery_sla = sla;
        }
        if let Some(buffer) = overrides.turnaround_buffer {
            config.turnaround_buffer = buffer;
        }

        config
    }

    /// Builds the dispatch problem, dropping records the engine could not
    /// plan with: unknown location references, non-finite numbers, negative
    /// hours, payouts or miles. Each drop is logged as a warning.
    pub fn build_problem(self) -> (DispatchProblem, IntakeReport) {
        let mut report = IntakeReport::default();

        let mut bad_locations: FxHashSet<usize> = FxHashSet::default();
        for (index, location) in self.locations.iter().enumerate() {
            let [lon, lat] = location.coordinates;
            if !lon.is_finite()
                || !lat.is_finite()
                || !(-90.0..=90.0).contains(&lat)
                || !(-180.0..=180.0).contains(&lon)
            {
                warn!("Location {index}: invalid coordinates [{lon}, {lat}]");
                bad_locations.insert(index);
                report.invalid_locations += 1;
            }
        }

        let locations: Vec<Location> = self
            .locations
            .iter()
            .map(|location| match &location.name {
                Some(name) => Location::named(
                    name.clone(),
                    location.coordinates[1],
                    location.coordinates[0],
                ),
                None => Location::from_lat_lon(location.coordinates[1], location.coordinates[0]),
            })
            .collect();

        let usable = |id: usize| id < locations.len() && !bad_locations.contains(&id);

        let mut drivers = Vec::with_capacity(self.drivers.len());
        for driver in self.drivers {
            if !usable(driver.start_location_id) || !usable(driver.target_location_id) {
                warn!("Driver {}: unusable location reference, skipping", driver.id);
                report.drivers_skipped += 1;
                continue;
            }
            if !driver.available_hours.is_finite() || driver.available_hours < 0.0 {
                warn!(
                    "Driver {}: invalid available hours {}, skipping",
                    driver.id, driver.available_hours
                );
                report.drivers_skipped += 1;
                continue;
            }

            let mut builder = DriverBuilder::default();
            builder
                .set_driver_id(driver.id)
                .set_start_location_id(driver.start_location_id)
                .set_target_location_id(driver.target_location_id)
                .set_available_hours(SignedDuration::from_secs_f64(
                    driver.available_hours * 3600.0,
                ));
            drivers.push(builder.build());
            report.drivers_accepted += 1;
        }

        let mut loads = Vec::with_capacity(self.loads.len());
        for load in self.loads {
            if !usable(load.origin_id) || !usable(load.destination_id) {
                warn!("Load {}: unusable location reference, skipping", load.id);
                report.loads_skipped += 1;
                continue;
            }
            if !load.payout.is_finite() || load.payout < 0.0 {
                warn!("Load {}: invalid payout {}, skipping", load.id, load.payout);
                report.loads_skipped += 1;
                continue;
            }
            if let Some(miles) = load.miles
                && (!miles.is_finite() || miles < 0.0)
            {
                warn!("Load {}: invalid distance {} miles, skipping", load.id, miles);
                report.loads_skipped += 1;
                continue;
            }

            let distance = match load.miles {
                Some(miles) => Miles::new(miles),
                None => {
                    locations[load.origin_id].haversine_miles(&locations[load.destination_id])
                }
            };

            let mut builder = LoadBuilder::default();
            builder
                .set_load_id(load.id)
                .set_origin_id(load.origin_id)
                .set_destination_id(load.destination_id)
                .set_payout(Dollars::new(load.payout))
                .set_distance(distance);
            loads.push(builder.build());
            report.loads_accepted += 1;
        }

        let mut builder = DispatchProblemBuilder::default();
        builder
            .set_locations(locations)
            .set_drivers(drivers)
            .set_loads(loads);

        (builder.build(), report)
    }

    pub fn from_problem(problem: &DispatchProblem) -> JsonScenario {
        JsonScenario {
            config: None,
            locations: problem
                .locations()
                .iter()
                .map(|location| JsonLocation {
                    name: location.name().map(str::to_owned),
                    coordinates: [location.lon(), location.lat()],
                })
                .collect(),
            drivers: problem
                .drivers()
                .iter()
                .map(|driver| JsonDriver {
                    id: driver.external_id().to_owned(),
                    start_location_id: driver.start_location_id().get(),
                    target_location_id: driver.target_location_id().get(),
                    available_hours: driver.available_hours().as_secs_f64() / 3600.0,
                })
                .collect(),
            loads: problem
                .loads()
                .iter()
                .map(|load| JsonLoad {
                    id: load.external_id().to_owned(),
                    origin_id: load.origin_id().get(),
                    destination_id: load.destination_id().get(),
                    payout: load.payout().value(),
                    miles: Some(load.distance().value()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::generator;

    fn minimal_scenario() -> &'static str {
        r#"{
            "locations": [
                { "name": "Chicago, IL", "coordinates": [-87.6298, 41.8781] },
                { "name": "Memphis, TN", "coordinates": [-90.0490, 35.1495] }
            ],
            "drivers": [
                { "id": "D1", "start_location_id": 0, "target_location_id": 1, "available_hours": 40.0 }
            ],
            "loads": [
                { "id": "L101", "origin_id": 0, "destination_id": 1, "payout": 1000.0, "miles": 500.0 }
            ]
        }"#
    }

    #[test]
    fn parses_and_builds_a_clean_scenario() {
        let scenario: JsonScenario = serde_json::from_str(minimal_scenario()).unwrap();
        let (problem, report) = scenario.build_problem();

        assert!(report.is_clean());
        assert_eq!(report.drivers_accepted, 1);
        assert_eq!(report.loads_accepted, 1);
        assert_eq!(problem.drivers().len(), 1);
        assert_eq!(problem.loads()[0].distance(), Miles::new(500.0));
    }

    #[test]
    fn rejects_unknown_fields() {
        let input = r#"{
            "locations": [],
            "drivers": [
                { "id": "D1", "start_location_id": 0, "target_location_id": 0, "available_hours": 40.0, "truck": "T800" }
            ],
            "loads": []
        }"#;

        assert!(serde_json::from_str::<JsonScenario>(input).is_err());
    }

    #[test]
    fn derives_miles_from_the_great_circle_when_omitted() {
        let mut scenario: JsonScenario = serde_json::from_str(minimal_scenario()).unwrap();
        scenario.loads[0].miles = None;

        let (problem, report) = scenario.build_problem();
        assert!(report.is_clean());
        let distance = problem.loads()[0].distance();
        assert!((distance.value() - 482.9).abs() < 2.0, "{distance:?}");
    }

    #[test]
    fn skips_records_with_unusable_references() {
        let mut scenario: JsonScenario = serde_json::from_str(minimal_scenario()).unwrap();
        scenario.drivers.push(JsonDriver {
            id: "GHOST".to_owned(),
            start_location_id: 9,
            target_location_id: 1,
            available_hours: 40.0,
        });
        scenario.loads.push(JsonLoad {
            id: "GHOST".to_owned(),
            origin_id: 0,
            destination_id: 7,
            payout: 1000.0,
            miles: Some(100.0),
        });

        let (problem, report) = scenario.build_problem();
        assert_eq!(report.drivers_skipped, 1);
        assert_eq!(report.loads_skipped, 1);
        assert_eq!(problem.drivers().len(), 1);
        assert_eq!(problem.loads().len(), 1);
    }

    #[test]
    fn skips_records_referencing_bad_coordinates() {
        let mut scenario: JsonScenario = serde_json::from_str(minimal_scenario()).unwrap();
        scenario.locations.push(JsonLocation {
            name: None,
            coordinates: [f64::NAN, 95.0],
        });
        scenario.loads.push(JsonLoad {
            id: "POLAR".to_owned(),
            origin_id: 2,
            destination_id: 0,
            payout: 1500.0,
            miles: Some(700.0),
        });

        let (problem, report) = scenario.build_problem();
        assert_eq!(report.invalid_locations, 1);
        assert_eq!(report.loads_skipped, 1);
        assert_eq!(problem.loads().len(), 1);
    }

    #[test]
    fn skips_negative_payouts_and_miles() {
        let mut scenario: JsonScenario = serde_json::from_str(minimal_scenario()).unwrap();
        scenario.loads.push(JsonLoad {
            id: "BAD-PAY".to_owned(),
            origin_id: 0,
            destination_id: 1,
            payout: -10.0,
            miles: Some(500.0),
        });
        scenario.loads.push(JsonLoad {
            id: "BAD-MILES".to_owned(),
            origin_id: 0,
            destination_id: 1,
            payout: 1000.0,
            miles: Some(-500.0),
        });

        let (problem, report) = scenario.build_problem();
        assert_eq!(report.loads_skipped, 2);
        assert_eq!(problem.loads().len(), 1);
    }

    #[test]
    fn overrides_only_what_the_file_mentions() {
        let mut scenario: JsonScenario = serde_json::from_str(minimal_scenario()).unwrap();
        scenario.config = Some(JsonConfigOverrides {
            miles_per_gallon: Some(7.5),
            deadhead_radius_miles: Some(200.0),
            ..Default::default()
        });

        let config = scenario.apply_config(&DispatchConfig::default());
        assert_eq!(config.miles_per_gallon, 7.5);
        assert_eq!(config.deadhead_radius, Miles::new(200.0));
        assert_eq!(config.fuel_price_per_gallon, 4.0);
    }

    #[test]
    fn demo_scenario_round_trips() {
        let scenario = JsonScenario::from_problem(&generator::sample_scenario());
        let json = serde_json::to_string_pretty(&scenario).unwrap();
        let (problem, report) = serde_json::from_str::<JsonScenario>(&json)
            .unwrap()
            .build_problem();

        assert!(report.is_clean());
        assert_eq!(problem.locations().len(), 10);
        assert_eq!(problem.drivers().len(), 6);
        assert_eq!(problem.loads().len(), 11);
        assert_eq!(problem.loads()[0].external_id(), "L101");
    }
}
