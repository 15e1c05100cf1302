pub mod door;
pub mod goal;
pub mod segment;
pub mod wall;

pub use door::{Door, DoorId, DoorKind, SubroomRef};
pub use goal::Goal;
pub use segment::Segment;
pub use wall::{Wall, WallKind};
