//! This module introduces struct [`Section`], the timeline of one play-side.

use crate::note::{Event, EventKind, Note, NoteKind};

/// An ordered timeline of notes and events for one player.
///
/// Both sequences are expected in ascending `time` order, but they are stored as given. Use
/// [`Chart::check`](crate::chart::Chart::check) to audit a built chart for ordering mistakes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    notes: Vec<Note>,
    events: Vec<Event>,
}

impl Section {
    /// Creates a new section from the note and event sequences.
    #[must_use]
    pub fn new(notes: Vec<Note>, events: Vec<Event>) -> Self {
        Self { notes, events }
    }

    /// The notes in the order they were given.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The events in the order they were given.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of notes, including rests.
    #[must_use]
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Number of events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of center hits, both normal and big.
    #[must_use]
    pub fn don_count(&self) -> usize {
        self.count_notes(NoteKind::is_don)
    }

    /// Number of rim hits, both normal and big.
    #[must_use]
    pub fn katsu_count(&self) -> usize {
        self.count_notes(NoteKind::is_katsu)
    }

    /// Number of big notes of either color.
    #[must_use]
    pub fn big_count(&self) -> usize {
        self.count_notes(NoteKind::is_big)
    }

    /// Number of rest notes.
    #[must_use]
    pub fn rest_count(&self) -> usize {
        self.count_notes(NoteKind::is_rest)
    }

    fn count_notes(&self, pred: impl Fn(NoteKind) -> bool) -> usize {
        self.notes.iter().filter(|note| pred(note.kind)).count()
    }

    /// Collects the gogo segments as `(begin, end)` times, walking the events in stored order.
    ///
    /// A begin while a segment is already open and an end without an open segment are skipped.
    /// A segment still open after the last event has `None` as its end.
    #[must_use]
    pub fn gogo_ranges(&self) -> Vec<(f64, Option<f64>)> {
        let mut ranges = Vec::new();
        let mut open = None;
        for event in &self.events {
            match (event.kind, open) {
                (EventKind::GogoBegin, None) => open = Some(event.time),
                (EventKind::GogoEnd, Some(begin)) => {
                    ranges.push((begin, Some(event.time)));
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(begin) = open {
            ranges.push((begin, None));
        }
        ranges
    }
}
