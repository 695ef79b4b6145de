//! The data model of taiko-style rhythm game charts (`.tja` and alike).
//!
//! This crate does not read or parse chart files. A parser builds a [`chart::Chart`] once through
//! [`chart::ChartBuilder`], and consumers only query it afterwards:
//!
//! - [`note`] defines the strike [`note::Note`] and the timeline [`note::Event`].
//! - [`section`] holds the timeline of one player.
//! - [`course`] holds one difficulty, played by one or two players.
//! - [`chart`] is the whole-file aggregate with its metadata and extra header fields.
//! - [`check`] audits the conditions a builder should satisfy but the model does not enforce.
//!
//! Querying content which is not there, such as the second player of a single course or a
//! difficulty not authored, results in [`error::ModelError`] instead of a panic.
//!
//! All the types are immutable after construction and can be shared between threads freely.
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` on all the model types.

pub mod chart;
pub mod check;
pub mod course;
pub mod error;
mod float;
pub mod note;
pub mod prelude;
pub mod section;

/// The major version of the chart model.
pub const VERSION_MAJOR: u8 = 1;
/// The minor version of the chart model.
pub const VERSION_MINOR: u8 = 0;
/// The patch version of the chart model.
pub const VERSION_PATCH: u8 = 0;

/// The version of the chart model as `(major, minor, patch)`.
///
/// This is tracked apart from the package version and changes only when the model does.
#[must_use]
pub const fn version() -> (u8, u8, u8) {
    (VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH)
}
