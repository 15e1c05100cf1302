//! Connectivity derived from the corrected geometry: subroom adjacency,
//! closed boundary polygons and their triangulation.

pub mod polygon;
pub mod triangulate;

pub use polygon::derive_polygon;
pub use triangulate::triangulate_ring;

use crate::building::Building;

/// Records, for every two-sided door, each side as the other's neighbor.
///
/// Doors to the outside and doors whose sides no longer resolve (after
/// correction) are skipped.
pub fn link_neighbors(building: &mut Building) {
    let pairs: Vec<_> = building
        .doors()
        .iter()
        .filter_map(|d| d.side2().map(|s2| (d.side1(), s2)))
        .filter(|(a, b)| a != b)
        .collect();

    for (a, b) in pairs {
        if let Ok(sub) = building.subroom_mut(a.room_id, a.subroom_id) {
            sub.add_neighbor(b);
        }
        if let Ok(sub) = building.subroom_mut(b.room_id, b.subroom_id) {
            sub.add_neighbor(a);
        }
    }
}
