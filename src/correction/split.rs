use crate::geometry::{Segment, Wall};
use crate::math::Point2;

/// Point at which `other` cuts the interior of `big`, if any.
///
/// Pairs that are equal, share an endpoint, or meet only at an endpoint of
/// `big` are not cuts.
#[must_use]
pub fn split_point(big: &Segment, other: &Segment) -> Option<Point2> {
    if big == other || big.shares_endpoint_with(other) {
        return None;
    }
    let ip = big.intersection_with(other)?;
    if big.has_endpoint(&ip) {
        return None;
    }
    Some(ip)
}

/// Splits `big` at every place another wall or door cuts its interior.
///
/// Returns the resulting sub-segments as walls carrying `big`'s kind; an
/// empty vector means nothing cuts `big`. Each cut produces the far piece
/// before the near piece, so repeated application keeps a stable order.
#[must_use]
pub fn split_wall(walls: &[Wall], doors: &[Segment], big: &Wall) -> Vec<Wall> {
    let cutters = walls
        .iter()
        .map(Wall::segment)
        .chain(doors.iter())
        .copied();

    let mut pieces = Vec::new();
    for cutter in cutters {
        if let Some(ip) = split_point(big.segment(), &cutter) {
            pieces.push(Wall::new(Segment::new(ip, big.p2()), big.kind()));
            pieces.push(Wall::new(Segment::new(big.p1(), ip), big.kind()));
        }
    }
    pieces
}
