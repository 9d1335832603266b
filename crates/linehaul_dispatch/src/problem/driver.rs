use jiff::SignedDuration;
use serde::Serialize;

use crate::{define_index_newtype, problem::location::LocationIdx};

define_index_newtype!(DriverIdx, Driver);

/// A driver with a weekly hours-of-service budget and a home target they
/// should end the week close to.
#[derive(Serialize, Debug, Clone)]
pub struct Driver {
    external_id: String,
    start_location_id: LocationIdx,
    target_location_id: LocationIdx,
    available_hours: SignedDuration,
}

impl Driver {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn start_location_id(&self) -> LocationIdx {
        self.start_location_id
    }

    pub fn target_location_id(&self) -> LocationIdx {
        self.target_location_id
    }

    pub fn available_hours(&self) -> SignedDuration {
        self.available_hours
    }
}

#[derive(Default)]
pub struct DriverBuilder {
    external_id: Option<String>,
    start_location_id: Option<usize>,
    target_location_id: Option<usize>,
    available_hours: Option<SignedDuration>,
}

impl DriverBuilder {
    pub fn set_driver_id(&mut self, external_id: String) -> &mut DriverBuilder {
        self.external_id = Some(external_id);
        self
    }

    pub fn set_start_location_id(&mut self, start_location_id: usize) -> &mut DriverBuilder {
        self.start_location_id = Some(start_location_id);
        self
    }

    pub fn set_target_location_id(&mut self, target_location_id: usize) -> &mut DriverBuilder {
        self.target_location_id = Some(target_location_id);
        self
    }

    pub fn set_available_hours(&mut self, available_hours: SignedDuration) -> &mut DriverBuilder {
        self.available_hours = Some(available_hours);
        self
    }

    pub fn build(self) -> Driver {
        Driver {
            external_id: self.external_id.expect("Driver ID is required"),
            start_location_id: self
                .start_location_id
                .expect("Start location is required")
                .into(),
            target_location_id: self
                .target_location_id
                .expect("Target location is required")
                .into(),
            available_hours: self.available_hours.unwrap_or(SignedDuration::ZERO),
        }
    }
}
