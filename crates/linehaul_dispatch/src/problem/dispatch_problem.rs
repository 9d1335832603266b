use crate::problem::driver::{Driver, DriverIdx};
use crate::problem::load::{Load, LoadIdx};
use crate::problem::load_origin_index::LoadOriginIndex;
use crate::problem::location::{Location, LocationIdx};

/// One planning day's worth of input: the road network locations, the
/// driver roster and the loads posted on the board.
pub struct DispatchProblem {
    locations: Vec<Location>,
    drivers: Vec<Driver>,
    loads: Vec<Load>,
    load_origin_index: LoadOriginIndex,
}

struct DispatchProblemParams {
    locations: Vec<Location>,
    drivers: Vec<Driver>,
    loads: Vec<Load>,
}

impl DispatchProblem {
    fn new(params: DispatchProblemParams) -> Self {
        let load_origin_index = LoadOriginIndex::new(&params.locations, &params.loads);

        Self {
            locations: params.locations,
            drivers: params.drivers,
            loads: params.loads,
            load_origin_index,
        }
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, location_id: LocationIdx) -> &Location {
        &self.locations[location_id]
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn driver(&self, driver_id: DriverIdx) -> &Driver {
        &self.drivers[driver_id]
    }

    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    pub fn load(&self, load_id: LoadIdx) -> &Load {
        &self.loads[load_id]
    }

    pub fn load_origin(&self, load_id: LoadIdx) -> &Location {
        &self.locations[self.loads[load_id].origin_id()]
    }

    pub fn load_destination(&self, load_id: LoadIdx) -> &Location {
        &self.locations[self.loads[load_id].destination_id()]
    }

    pub fn driver_target(&self, driver_id: DriverIdx) -> &Location {
        &self.locations[self.drivers[driver_id].target_location_id()]
    }

    pub fn load_origin_index(&self) -> &LoadOriginIndex {
        &self.load_origin_index
    }
}

#[derive(Default)]
pub struct DispatchProblemBuilder {
    locations: Option<Vec<Location>>,
    drivers: Option<Vec<Driver>>,
    loads: Option<Vec<Load>>,
}

impl DispatchProblemBuilder {
    pub fn set_locations(&mut self, locations: Vec<Location>) -> &mut DispatchProblemBuilder {
        self.locations = Some(locations);
        self
    }

    pub fn add_location(&mut self, location: Location) -> &mut DispatchProblemBuilder {
        if let Some(locations) = &mut self.locations {
            locations.push(location);
        } else {
            self.locations = Some(vec![location]);
        }

        self
    }

    pub fn set_drivers(&mut self, drivers: Vec<Driver>) -> &mut DispatchProblemBuilder {
        self.drivers = Some(drivers);
        self
    }

    pub fn add_driver(&mut self, driver: Driver) -> &mut DispatchProblemBuilder {
        if let Some(drivers) = &mut self.drivers {
            drivers.push(driver);
        } else {
            self.drivers = Some(vec![driver]);
        }

        self
    }

    pub fn set_loads(&mut self, loads: Vec<Load>) -> &mut DispatchProblemBuilder {
        self.loads = Some(loads);
        self
    }

    pub fn add_load(&mut self, load: Load) -> &mut DispatchProblemBuilder {
        if let Some(loads) = &mut self.loads {
            loads.push(load);
        } else {
            self.loads = Some(vec![load]);
        }

        self
    }

    pub fn build(self) -> DispatchProblem {
        let locations = self.locations.expect("Expected list of locations");
        let drivers = self.drivers.unwrap_or_default();
        let loads = self.loads.unwrap_or_default();

        for driver in drivers.iter() {
            if driver.start_location_id().get() >= locations.len()
                || driver.target_location_id().get() >= locations.len()
            {
                panic!("Driver location ID must be within the range of locations");
            }
        }

        for load in loads.iter() {
            if load.origin_id().get() >= locations.len()
                || load.destination_id().get() >= locations.len()
            {
                panic!("Load location ID must be within the range of locations");
            }
        }

        DispatchProblem::new(DispatchProblemParams {
            locations,
            drivers,
            loads,
        })
    }
}
