//! Audit of the conditions the builder of a chart should satisfy but the model does not enforce.
//!
//! The model stores whatever it is given, so a chart with unordered notes, broken gogo segments or
//! a course stored in the slot of another difficulty can exist. [`Chart::check`] reports them
//! without changing anything.

use itertools::Itertools;
use thiserror::Error;

use crate::{
    chart::Chart,
    course::{Difficulty, PlayerSide},
    note::EventKind,
    section::Section,
};

/// A condition of the chart which consumers are allowed to assume but does not hold.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartWarning {
    /// A note is earlier than the previous one.
    #[error("{slot} {side}: note #{index} is earlier than the previous note")]
    UnorderedNotes {
        /// The slot of the course.
        slot: Difficulty,
        /// The side of the section.
        side: PlayerSide,
        /// The index of the first offending note.
        index: usize,
    },
    /// An event is earlier than the previous one.
    #[error("{slot} {side}: event #{index} is earlier than the previous event")]
    UnorderedEvents {
        /// The slot of the course.
        slot: Difficulty,
        /// The side of the section.
        side: PlayerSide,
        /// The index of the first offending event.
        index: usize,
    },
    /// A gogo begin inside a gogo segment, or a gogo end outside of any.
    #[error("{slot} {side}: unbalanced gogo event at {time}")]
    UnbalancedGogo {
        /// The slot of the course.
        slot: Difficulty,
        /// The side of the section.
        side: PlayerSide,
        /// The time of the offending event.
        time: f64,
    },
    /// A gogo segment is not closed until the end of the section.
    #[error("{slot} {side}: gogo segment is not closed")]
    UnclosedGogo {
        /// The slot of the course.
        slot: Difficulty,
        /// The side of the section.
        side: PlayerSide,
    },
    /// The course says another difficulty than the slot it is stored in.
    #[error("course in slot {slot} says its difficulty is {stored}")]
    DifficultyMismatch {
        /// The slot of the course.
        slot: Difficulty,
        /// The difficulty recorded in the course.
        stored: Difficulty,
    },
    /// The section has no notes to hit.
    #[error("{slot} {side}: there are no notes to hit")]
    NoNotes {
        /// The slot of the course.
        slot: Difficulty,
        /// The side of the section.
        side: PlayerSide,
    },
}

/// Output of the chart check.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckOutput {
    /// Warnings found, in difficulty order and then player side order.
    pub warnings: Vec<ChartWarning>,
}

impl CheckOutput {
    /// Returns whether no warning was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl Chart {
    /// Checks the chart for conditions the model does not enforce.
    #[must_use]
    pub fn check(&self) -> CheckOutput {
        let mut warnings = Vec::new();
        for (slot, course) in self.courses() {
            if course.difficulty_type() != slot {
                warnings.push(ChartWarning::DifficultyMismatch {
                    slot,
                    stored: course.difficulty_type(),
                });
            }
            for (side, section) in course.sections() {
                check_section(section, slot, side, &mut warnings);
            }
        }
        CheckOutput { warnings }
    }
}

fn check_section(
    section: &Section,
    slot: Difficulty,
    side: PlayerSide,
    warnings: &mut Vec<ChartWarning>,
) {
    if section.notes().iter().all(|note| note.kind.is_rest()) {
        warnings.push(ChartWarning::NoNotes { slot, side });
    }
    if let Some(index) = first_descending(section.notes().iter().map(|note| note.time)) {
        warnings.push(ChartWarning::UnorderedNotes { slot, side, index });
    }
    if let Some(index) = first_descending(section.events().iter().map(|event| event.time)) {
        warnings.push(ChartWarning::UnorderedEvents { slot, side, index });
    }

    let mut in_gogo = false;
    for event in section.events() {
        match (event.kind, in_gogo) {
            (EventKind::GogoBegin, false) => in_gogo = true,
            (EventKind::GogoEnd, true) => in_gogo = false,
            (EventKind::GogoBegin, true) | (EventKind::GogoEnd, false) => {
                warnings.push(ChartWarning::UnbalancedGogo {
                    slot,
                    side,
                    time: event.time,
                });
            }
            _ => {}
        }
    }
    if in_gogo {
        warnings.push(ChartWarning::UnclosedGogo { slot, side });
    }
}

/// Finds the index of the first time which is less than its predecessor.
fn first_descending(times: impl Iterator<Item = f64>) -> Option<usize> {
    times
        .tuple_windows()
        .position(|(prev, next)| next < prev)
        .map(|pos| pos + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_descending() {
        assert_eq!(first_descending([0.0, 1.0, 1.0, 2.0].into_iter()), None);
        assert_eq!(first_descending([0.0, 2.0, 1.0, 0.5].into_iter()), Some(2));
        assert_eq!(first_descending(std::iter::empty()), None);
    }
}
