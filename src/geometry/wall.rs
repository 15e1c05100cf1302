use std::fmt;

use crate::math::Point2;

use super::Segment;

/// Boundary-type label of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    /// Ordinary impassable wall.
    Plain,
    /// Part of a numbered platform track edge ("track-N" in the floor plan).
    Track(u32),
}

impl WallKind {
    /// Parses a floor-plan type label. Anything that is not a well-formed
    /// `track-N` tag is treated as a plain wall.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label
            .strip_prefix("track-")
            .and_then(|n| n.parse().ok())
            .map_or(WallKind::Plain, WallKind::Track)
    }

    #[must_use]
    pub fn track_index(&self) -> Option<u32> {
        match self {
            WallKind::Plain => None,
            WallKind::Track(n) => Some(*n),
        }
    }
}

impl fmt::Display for WallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallKind::Plain => write!(f, "internal"),
            WallKind::Track(n) => write!(f, "track-{n}"),
        }
    }
}

/// An impassable boundary segment tagged with its boundary type.
///
/// Identity for de-duplication is the undirected segment plus the kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    segment: Segment,
    kind: WallKind,
}

impl Wall {
    #[must_use]
    pub fn new(segment: Segment, kind: WallKind) -> Self {
        Self { segment, kind }
    }

    /// A plain wall between two points.
    #[must_use]
    pub fn plain(p1: Point2, p2: Point2) -> Self {
        Self::new(Segment::new(p1, p2), WallKind::Plain)
    }

    #[must_use]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    #[must_use]
    pub fn kind(&self) -> WallKind {
        self.kind
    }

    #[must_use]
    pub fn p1(&self) -> Point2 {
        self.segment.p1()
    }

    #[must_use]
    pub fn p2(&self) -> Point2 {
        self.segment.p2()
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.segment, self.kind)
    }
}
