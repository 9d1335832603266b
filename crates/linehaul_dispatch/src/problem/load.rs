use serde::Serialize;

use crate::{
    define_index_newtype,
    problem::{dollars::Dollars, location::LocationIdx, miles::Miles},
};

define_index_newtype!(LoadIdx, Load);

/// A freight load: pick up at the origin, deliver to the destination,
/// collect the payout. `distance` is the billable road distance, which may
/// exceed the great-circle distance between the two endpoints.
#[derive(Serialize, Debug, Clone)]
pub struct Load {
    external_id: String,
    origin_id: LocationIdx,
    destination_id: LocationIdx,
    payout: Dollars,
    distance: Miles,
}

impl Load {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn origin_id(&self) -> LocationIdx {
        self.origin_id
    }

    pub fn destination_id(&self) -> LocationIdx {
        self.destination_id
    }

    pub fn payout(&self) -> Dollars {
        self.payout
    }

    pub fn distance(&self) -> Miles {
        self.distance
    }
}

#[derive(Default)]
pub struct LoadBuilder {
    external_id: Option<String>,
    origin_id: Option<usize>,
    destination_id: Option<usize>,
    payout: Option<Dollars>,
    distance: Option<Miles>,
}

impl LoadBuilder {
    pub fn set_load_id(&mut self, external_id: String) -> &mut LoadBuilder {
        self.external_id = Some(external_id);
        self
    }

    pub fn set_origin_id(&mut self, origin_id: usize) -> &mut LoadBuilder {
        self.origin_id = Some(origin_id);
        self
    }

    pub fn set_destination_id(&mut self, destination_id: usize) -> &mut LoadBuilder {
        self.destination_id = Some(destination_id);
        self
    }

    pub fn set_payout(&mut self, payout: Dollars) -> &mut LoadBuilder {
        self.payout = Some(payout);
        self
    }

    pub fn set_distance(&mut self, distance: Miles) -> &mut LoadBuilder {
        self.distance = Some(distance);
        self
    }

    pub fn build(self) -> Load {
        Load {
            external_id: self.external_id.expect("Load ID is required"),
            origin_id: self.origin_id.expect("Origin location is required").into(),
            destination_id: self
                .destination_id
                .expect("Destination location is required")
                .into(),
            payout: self.payout.expect("Payout is required"),
            distance: self.distance.expect("Distance is required"),
        }
    }
}
