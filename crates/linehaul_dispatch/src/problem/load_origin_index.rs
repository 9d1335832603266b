use rstar::primitives::GeomWithData;
use rstar::{AABB, Envelope, PointDistance, RTree, RTreeObject};

use geo::{Distance, Haversine};

use crate::problem::load::{Load, LoadIdx};
use crate::problem::location::{Location, METERS_PER_MILE};
use crate::problem::miles::Miles;
use crate::utils::enumerate_idx::EnumerateIdx;

pub struct IndexedOrigin {
    x: f64,
    y: f64,
}

impl RTreeObject for IndexedOrigin {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PointDistance for IndexedOrigin {
    // Squared distance in miles, so radius queries take a miles radius.
    fn distance_2(
        &self,
        point: &<Self::Envelope as Envelope>::Point,
    ) -> <<Self::Envelope as Envelope>::Point as rstar::Point>::Scalar {
        let distance = Haversine.distance(
            geo::Point::new(self.x, self.y),
            geo::Point::new(point[0], point[1]),
        ) / METERS_PER_MILE;

        distance * distance
    }
}

pub type LoadOriginObject = GeomWithData<IndexedOrigin, LoadIdx>;

/// Spatial index over load origins, used to find the loads a driver could
/// deadhead to from their current position.
pub struct LoadOriginIndex {
    tree: RTree<LoadOriginObject>,
}

impl LoadOriginIndex {
    pub fn new(locations: &[Location], loads: &[Load]) -> LoadOriginIndex {
        let tree: RTree<LoadOriginObject> = RTree::bulk_load(
            loads
                .iter()
                .enumerate_idx()
                .map(|(load_id, load)| {
                    let origin = &locations[load.origin_id()];

                    LoadOriginObject::new(
                        IndexedOrigin {
                            x: origin.lon(),
                            y: origin.lat(),
                        },
                        load_id,
                    )
                })
                .collect(),
        );

        LoadOriginIndex { tree }
    }

    /// Loads whose origin lies within `radius` miles of `point`, in
    /// ascending `LoadIdx` order. rstar yields matches in tree order,
    /// which is not stable, so the result is re-sorted.
    pub fn within_radius<P>(&self, point: P, radius: Miles) -> Vec<LoadIdx>
    where
        P: Into<geo::Point>,
    {
        let point: geo::Point = point.into();

        let mut matches: Vec<LoadIdx> = self
            .tree
            .locate_within_distance([point.x(), point.y()], radius.value() * radius.value())
            .map(|object| object.data)
            .collect();
        matches.sort_unstable();

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::dollars::Dollars;
    use crate::problem::load::LoadBuilder;

    fn load_from(origin_id: usize, external_id: &str) -> Load {
        let mut builder = LoadBuilder::default();
        builder
            .set_load_id(external_id.to_owned())
            .set_origin_id(origin_id)
            .set_destination_id(0)
            .set_payout(Dollars::new(1000.0))
            .set_distance(Miles::new(500.0));
        builder.build()
    }

    fn index() -> LoadOriginIndex {
        let locations = vec![
            Location::named("Chicago, IL", 41.8781, -87.6298),
            Location::named("Memphis, TN", 35.1495, -90.0490),
            Location::named("Nashville, TN", 36.1627, -86.7816),
        ];
        let loads = vec![
            load_from(0, "L0"),
            load_from(1, "L1"),
            load_from(2, "L2"),
            load_from(1, "L3"),
        ];
        LoadOriginIndex::new(&locations, &loads)
    }

    #[test]
    fn finds_origins_within_radius_sorted() {
        let memphis = geo::Point::new(-90.0490, 35.1495);

        // Nashville is ~196 miles from Memphis, Chicago ~483.
        let nearby = index().within_radius(memphis, Miles::new(250.0));
        assert_eq!(
            nearby,
            vec![LoadIdx::new(1), LoadIdx::new(2), LoadIdx::new(3)]
        );
    }

    #[test]
    fn tight_radius_keeps_only_local_origins() {
        let memphis = geo::Point::new(-90.0490, 35.1495);

        let local = index().within_radius(memphis, Miles::new(100.0));
        assert_eq!(local, vec![LoadIdx::new(1), LoadIdx::new(3)]);
    }

    #[test]
    fn coincident_origins_match_any_radius() {
        let memphis = geo::Point::new(-90.0490, 35.1495);

        let colocated = index().within_radius(memphis, Miles::new(1.0));
        assert_eq!(colocated, vec![LoadIdx::new(1), LoadIdx::new(3)]);
    }

    #[test]
    fn empty_when_nothing_in_range() {
        let seattle = geo::Point::new(-122.3321, 47.6062);

        assert!(index().within_radius(seattle, Miles::new(500.0)).is_empty());
    }
}
