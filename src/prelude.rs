//! Prelude module for the chart model.
//!
//! This module re-exports all public types for convenient access.
//! You can use `use ttfs::prelude::*;` to import them at once.

pub use crate::{
    chart::{Chart, ChartBuilder, Genre, HeaderType, HeaderValue, ParseGenreError},
    check::{ChartWarning, CheckOutput},
    course::{Course, CourseBody, Difficulty, ParseDifficultyError, PlayerSide},
    error::{ModelError, Result},
    note::{Event, EventKind, Note, NoteKind},
    section::Section,
};
