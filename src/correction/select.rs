use tracing::debug;

use crate::building::SubRoom;
use crate::error::LoadError;
use crate::geometry::{Segment, Wall};

/// Connectivity score of a candidate piece: how many existing walls it
/// touches or crosses, plus the doors it shares an endpoint with.
fn connectivity(piece: &Wall, walls: &[Wall], doors: &[Segment]) -> usize {
    let wall_hits = walls
        .iter()
        .filter(|w| {
            piece.segment().shares_endpoint_with(w.segment())
                || piece.segment().intersection_with(w.segment()).is_some()
        })
        .count();
    let door_hits = doors
        .iter()
        .filter(|d| piece.segment().shares_endpoint_with(d))
        .count();
    wall_hits + door_hits
}

/// Replaces a removed over-long wall with the best-connected of its pieces.
///
/// Only pieces touching at least two existing walls or doors qualify; all of
/// them are kept. A dangling piece with fewer connections is never accepted
/// as the sole replacement. Ties keep the earlier piece.
///
/// # Errors
///
/// Returns [`LoadError::UnresolvedWallSplit`] if no piece qualifies.
pub fn replace_big_wall(
    subroom: &mut SubRoom,
    doors: &[Segment],
    big: &Wall,
    pieces: &[Wall],
) -> Result<(), LoadError> {
    let existing = subroom.walls().to_vec();

    let mut chosen: Option<(usize, Wall)> = None;
    let mut keep: Vec<Wall> = Vec::new();
    for piece in pieces {
        let count = connectivity(piece, &existing, doors);
        if count < 2 {
            continue;
        }
        keep.push(*piece);
        match chosen {
            Some((best, _)) if count <= best => {}
            _ => chosen = Some((count, *piece)),
        }
    }

    let Some((count, best)) = chosen else {
        return Err(LoadError::UnresolvedWallSplit {
            room_id: subroom.room_id(),
            subroom_id: subroom.subroom_id(),
            wall: big.to_string(),
        });
    };

    debug!(
        room = subroom.room_id(),
        subroom = subroom.subroom_id(),
        wall = %big,
        piece = %best,
        connectivity = count,
        "replacing over-long wall with its best-connected piece"
    );
    for piece in keep {
        subroom.add_wall(piece);
    }
    subroom.add_wall(best);
    Ok(())
}
