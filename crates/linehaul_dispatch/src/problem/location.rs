use geo::{Distance, Haversine};

use crate::define_index_newtype;
use crate::problem::miles::Miles;

define_index_newtype!(LocationIdx, Location);

pub(crate) const METERS_PER_MILE: f64 = 1_609.344;

/// A point on the road network, typically a city. Coordinates are stored
/// as a `geo` point in (lon, lat) order.
#[derive(Debug, Clone)]
pub struct Location {
    point: geo::Point,
    name: Option<String>,
}

impl Location {
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self {
            point: geo::Point::new(lon, lat),
            name: None,
        }
    }

    pub fn named(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            point: geo::Point::new(lon, lat),
            name: Some(name.into()),
        }
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Label used in assignment records: the place name when one is known,
    /// otherwise the raw coordinates.
    pub fn describe(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{:.4},{:.4}", self.lat(), self.lon()),
        }
    }

    /// Great-circle distance on the spherical earth model.
    pub fn haversine_miles(&self, to: &Location) -> Miles {
        let haversine = Haversine;

        Miles::new(haversine.distance(self.point, to.point) / METERS_PER_MILE)
    }

    /// Miles gained toward `target` by relocating from here to `via`.
    /// Positive when `via` sits closer to the target than this location,
    /// negative when the move points away from it.
    pub fn progress_toward(&self, target: &Location, via: &Location) -> Miles {
        self.haversine_miles(target) - via.haversine_miles(target)
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        location.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicago() -> Location {
        Location::named("Chicago, IL", 41.8781, -87.6298)
    }

    fn memphis() -> Location {
        Location::named("Memphis, TN", 35.1495, -90.0490)
    }

    fn dallas() -> Location {
        Location::named("Dallas, TX", 32.7767, -96.7970)
    }

    #[test]
    fn haversine_matches_known_leg() {
        let distance = chicago().haversine_miles(&memphis());
        assert!((distance.value() - 482.9).abs() < 2.0, "{distance:?}");
    }

    #[test]
    fn haversine_is_symmetric() {
        let out = chicago().haversine_miles(&dallas());
        let back = dallas().haversine_miles(&chicago());
        assert_eq!(out, back);
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert!(chicago().haversine_miles(&chicago()).is_zero());
    }

    #[test]
    fn progress_is_signed() {
        let toward = chicago().progress_toward(&dallas(), &memphis());
        let away = memphis().progress_toward(&dallas(), &chicago());
        assert!(toward > Miles::ZERO);
        assert!(away < Miles::ZERO);
        assert_eq!(toward.value(), -away.value());
    }

    #[test]
    fn describe_falls_back_to_coordinates() {
        assert_eq!(chicago().describe(), "Chicago, IL");
        assert_eq!(
            Location::from_lat_lon(35.0, -90.0).describe(),
            "35.0000,-90.0000"
        );
    }
}
