//! Definitions of the smallest timed units on a section timeline: [`Note`] and [`Event`].
//!
//! Both are plain values. Their float fields are compared by IEEE 754 total ordering, with `-0.0`
//! equal to `0.0` and all NaNs equal to each other, so they can be sorted, deduplicated and used
//! as map keys without any extra wrapper.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::float::{cmp_f64, hash_f64};

/// A kind of the strike note.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteKind {
    /// A blank slot, no strike is required.
    #[default]
    Rest,
    /// A center hit.
    Don,
    /// A rim hit.
    Katsu,
    /// A big center hit, scored as a double strike.
    BigDon,
    /// A big rim hit, scored as a double strike.
    BigKatsu,
}

impl NoteKind {
    /// Returns whether the note is a center hit, regardless of its size.
    #[must_use]
    pub const fn is_don(self) -> bool {
        matches!(self, Self::Don | Self::BigDon)
    }

    /// Returns whether the note is a rim hit, regardless of its size.
    #[must_use]
    pub const fn is_katsu(self) -> bool {
        matches!(self, Self::Katsu | Self::BigKatsu)
    }

    /// Returns whether the note is a big one.
    #[must_use]
    pub const fn is_big(self) -> bool {
        matches!(self, Self::BigDon | Self::BigKatsu)
    }

    /// Returns whether the note requires no strike.
    #[must_use]
    pub const fn is_rest(self) -> bool {
        matches!(self, Self::Rest)
    }
}

/// A kind of the timeline event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Nothing happens.
    #[default]
    Rest,
    /// A measure (bar) boundary.
    Measure,
    /// Start of a gogo segment.
    GogoBegin,
    /// End of a gogo segment.
    GogoEnd,
}

/// A strike note placed on the timeline.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    /// The strike type.
    pub kind: NoteKind,
    /// The tempo in effect at this note.
    pub bpm: f64,
    /// The position on the timeline.
    pub time: f64,
    /// The scroll speed multiplier.
    pub speed: f64,
}

impl Note {
    /// Creates a new note.
    #[must_use]
    pub const fn new(kind: NoteKind, bpm: f64, time: f64, speed: f64) -> Self {
        Self {
            kind,
            bpm,
            time,
            speed,
        }
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new(NoteKind::Rest, 0.0, 0.0, 1.0)
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Note {}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_f64(self.time, other.time)
            .then(self.kind.cmp(&other.kind))
            .then(cmp_f64(self.bpm, other.bpm))
            .then(cmp_f64(self.speed, other.speed))
    }
}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        hash_f64(self.bpm, state);
        hash_f64(self.time, state);
        hash_f64(self.speed, state);
    }
}

/// A non-strike marker placed on the timeline.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// The event type.
    pub kind: EventKind,
    /// The position on the timeline.
    pub time: f64,
    /// The scroll speed multiplier.
    pub speed: f64,
}

impl Event {
    /// Creates a new event.
    #[must_use]
    pub const fn new(kind: EventKind, time: f64, speed: f64) -> Self {
        Self { kind, time, speed }
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new(EventKind::Rest, 0.0, 1.0)
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_f64(self.time, other.time)
            .then(self.kind.cmp(&other.kind))
            .then(cmp_f64(self.speed, other.speed))
    }
}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        hash_f64(self.time, state);
        hash_f64(self.speed, state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_note_kind_categories() {
        assert!(NoteKind::Don.is_don());
        assert!(NoteKind::BigDon.is_don());
        assert!(!NoteKind::Katsu.is_don());
        assert!(NoteKind::BigKatsu.is_katsu());
        assert!(NoteKind::BigKatsu.is_big());
        assert!(!NoteKind::Don.is_big());
        assert!(NoteKind::Rest.is_rest());
        assert!(!NoteKind::Rest.is_don() && !NoteKind::Rest.is_katsu());
    }

    #[test]
    fn test_notes_sort_by_time_first() {
        let mut notes = vec![
            Note::new(NoteKind::Don, 120.0, 1.0, 1.0),
            Note::new(NoteKind::Katsu, 180.0, 0.5, 1.0),
            Note::new(NoteKind::Rest, 60.0, 0.0, 2.0),
        ];
        notes.sort();
        let times: Vec<_> = notes.iter().map(|note| note.time).collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_equal_values_dedup() {
        let a = Event::new(EventKind::Measure, 2.0, 1.0);
        let b = Event::new(EventKind::Measure, 2.0, 1.0);
        let c = Event::new(EventKind::GogoBegin, 2.0, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_nan_is_equal_to_itself() {
        let note = Note::new(NoteKind::Don, f64::NAN, 0.0, 1.0);
        assert_eq!(note, note);
    }

    #[test]
    fn test_signed_zero_time_is_same_position() {
        let plus = Note::new(NoteKind::Don, 120.0, 0.0, 1.0);
        let minus = Note::new(NoteKind::Don, 120.0, -0.0, 1.0);
        assert_eq!(plus, minus);
        assert_eq!(plus.cmp(&minus), Ordering::Equal);

        let set: HashSet<_> = [plus, minus].into_iter().collect();
        assert_eq!(set.len(), 1);

        let begin = Event::new(EventKind::GogoBegin, -0.0, 1.0);
        assert_eq!(begin, Event::new(EventKind::GogoBegin, 0.0, 1.0));
        let events: HashSet<_> = [begin, Event::new(EventKind::GogoBegin, 0.0, 1.0)]
            .into_iter()
            .collect();
        assert_eq!(events.len(), 1);
    }
}
