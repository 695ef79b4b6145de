//! Errors of the query operations on the chart model.

use thiserror::Error;

use crate::course::Difficulty;

/// An error occurred when querying content the model does not have.
///
/// Both are caller mistakes which can be checked in advance with [`Course::has_doubles`] or
/// `Chart::has_*` methods.
///
/// [`Course::has_doubles`]: crate::course::Course::has_doubles
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelError {
    /// The section of the second player was requested from a single course.
    #[error("the course has no section for the second player")]
    NoSecondPlayer,
    /// The course of the difficulty was requested but not authored in the chart.
    #[error("the chart has no {0} course")]
    DifficultyNotPresent(Difficulty),
}

/// A result type for the query operations.
pub type Result<T> = std::result::Result<T, ModelError>;
