//! Train arrival events: the schedule data and the transactional geometry
//! mutation they trigger.

pub mod mutate;

pub use mutate::{apply_event, reset_event};

use std::fmt;

use tracing::warn;

use crate::geometry::Segment;
use crate::math::Point2;

/// Identifier of a timetable entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub i32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A train model: its doors as segments relative to the track it docks at.
#[derive(Debug, Clone)]
pub struct TrainType {
    pub name: String,
    pub length: f64,
    pub max_agents: usize,
    pub doors: Vec<Segment>,
}

/// One scheduled train arrival.
#[derive(Debug, Clone)]
pub struct TimetableEntry {
    pub id: EventId,
    pub train_type: String,
    pub track_start: Point2,
    pub track_end: Point2,
    /// Simulation time of arrival, seconds.
    pub arrival: f64,
    /// Simulation time of departure, seconds.
    pub departure: f64,
}

impl TimetableEntry {
    /// Returns the entry with arrival and departure in order, swapping them
    /// with a warning when the schedule lists them backwards.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.arrival > self.departure {
            warn!(
                event = %self.id,
                arrival = self.arrival,
                departure = self.departure,
                "train departs before it arrives, swapping the times"
            );
            std::mem::swap(&mut self.arrival, &mut self.departure);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(arrival: f64, departure: f64) -> TimetableEntry {
        TimetableEntry {
            id: EventId(1),
            train_type: "RE".into(),
            track_start: Point2::new(0.0, 0.0),
            track_end: Point2::new(10.0, 0.0),
            arrival,
            departure,
        }
    }

    #[test]
    fn backwards_times_are_swapped() {
        let e = entry(120.0, 60.0).normalized();
        assert!((e.arrival - 60.0).abs() < f64::EPSILON);
        assert!((e.departure - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ordered_times_are_kept() {
        let e = entry(60.0, 120.0).normalized();
        assert!((e.arrival - 60.0).abs() < f64::EPSILON);
    }
}
