//! The whole-file aggregate [`Chart`] and its metadata types.
//!
//! A chart is built once with a [`ChartBuilder`] and only answers queries after that:
//!
//! ```
//! use ttfs::prelude::*;
//!
//! let section = Section::new(
//!     vec![
//!         Note::new(NoteKind::Don, 150.0, 0.0, 1.0),
//!         Note::new(NoteKind::Katsu, 150.0, 0.5, 1.0),
//!     ],
//!     vec![],
//! );
//! let chart = ChartBuilder::new()
//!     .title("Example")
//!     .bpm(150.0)
//!     .course(
//!         Difficulty::Oni,
//!         Course::single(Difficulty::Oni, 8, section).with_scores(300, 100),
//!     )
//!     .header("MAKER", "someone")
//!     .build();
//!
//! assert!(chart.has_oni());
//! assert_eq!(chart.oni().map(Course::level), Ok(8));
//! assert_eq!(chart.easy(), Err(ModelError::DifficultyNotPresent(Difficulty::Easy)));
//! assert_eq!(chart.get::<str>("MAKER"), Some("someone"));
//! assert_eq!(chart.get::<i64>("MAKER"), None);
//! ```

pub mod builder;

use std::{
    collections::{BTreeMap, HashMap},
    str::FromStr,
};

use thiserror::Error;

use crate::{
    course::{Course, Difficulty},
    error::{ModelError, Result},
    float::eq_f64,
};

pub use self::builder::ChartBuilder;

/// A genre of the music.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Genre {
    /// Not specified or not recognized.
    #[default]
    Unknown,
    /// J-POP.
    Pop,
    /// Children's songs.
    Kids,
    /// Original songs of the game.
    Namco,
    /// Classical music.
    Classic,
    /// Variety.
    Variety,
    /// Game music.
    Game,
    /// Vocaloid songs.
    Vocaloid,
    /// Anime songs.
    Anime,
}

impl Genre {
    /// All the genres.
    pub const ALL: [Self; 9] = [
        Self::Unknown,
        Self::Pop,
        Self::Kids,
        Self::Namco,
        Self::Classic,
        Self::Variety,
        Self::Game,
        Self::Vocaloid,
        Self::Anime,
    ];
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Pop => "pop",
            Self::Kids => "kids",
            Self::Namco => "namco",
            Self::Classic => "classic",
            Self::Variety => "variety",
            Self::Game => "game",
            Self::Vocaloid => "vocaloid",
            Self::Anime => "anime",
        };
        f.write_str(name)
    }
}

/// An error occurred when parsing a [`Genre`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unknown genre: {0:?}")]
pub struct ParseGenreError(pub String);

impl FromStr for Genre {
    type Err = ParseGenreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|genre| trimmed.eq_ignore_ascii_case(&genre.to_string()))
            .ok_or_else(|| ParseGenreError(s.to_owned()))
    }
}

/// A value of the header field which is not promoted into a named attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderValue {
    /// A text value.
    Text(String),
    /// A signed integer value.
    Int(i64),
}

impl std::fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for HeaderValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for i64 {}
}

/// A type which can be read out of a [`HeaderValue`] by [`Chart::get`].
///
/// Implemented for `str` (matches [`HeaderValue::Text`]) and `i64` (matches [`HeaderValue::Int`]).
pub trait HeaderType: sealed::Sealed {
    /// Borrows the value if it holds this type.
    fn from_header(value: &HeaderValue) -> Option<&Self>;
}

impl HeaderType for str {
    fn from_header(value: &HeaderValue) -> Option<&Self> {
        match value {
            HeaderValue::Text(text) => Some(text.as_str()),
            HeaderValue::Int(_) => None,
        }
    }
}

impl HeaderType for i64 {
    fn from_header(value: &HeaderValue) -> Option<&Self> {
        match value {
            HeaderValue::Int(int) => Some(int),
            HeaderValue::Text(_) => None,
        }
    }
}

/// A chart data aggregate, the content of one chart file.
///
/// Equality compares the float attributes the same way as [`Note`](crate::note::Note) does.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    pub(crate) genre: Genre,
    pub(crate) wave: String,
    pub(crate) title: String,
    pub(crate) subtitle: String,
    pub(crate) bpm: f64,
    pub(crate) offset: f64,
    pub(crate) demo_start: f64,
    pub(crate) courses: BTreeMap<Difficulty, Course>,
    pub(crate) headers: HashMap<String, HeaderValue>,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            genre: Genre::Unknown,
            wave: String::new(),
            title: String::new(),
            subtitle: String::new(),
            bpm: 120.0,
            offset: 0.0,
            demo_start: 0.0,
            courses: BTreeMap::new(),
            headers: HashMap::new(),
        }
    }
}

impl PartialEq for Chart {
    fn eq(&self, other: &Self) -> bool {
        self.genre == other.genre
            && self.wave == other.wave
            && self.title == other.title
            && self.subtitle == other.subtitle
            && eq_f64(self.bpm, other.bpm)
            && eq_f64(self.offset, other.offset)
            && eq_f64(self.demo_start, other.demo_start)
            && self.courses == other.courses
            && self.headers == other.headers
    }
}

impl Eq for Chart {}

macro_rules! difficulty_accessors {
    ($($has:ident, $get:ident => $difficulty:ident;)*) => {
        $(
            #[doc = concat!("Returns whether the `", stringify!($get), "` course is authored.")]
            #[must_use]
            pub fn $has(&self) -> bool {
                self.has_course(Difficulty::$difficulty)
            }

            #[doc = concat!("The `", stringify!($get), "` course.")]
            ///
            /// # Errors
            ///
            /// Returns [`ModelError::DifficultyNotPresent`] if the course is not authored.
            pub fn $get(&self) -> Result<&Course> {
                self.course(Difficulty::$difficulty)
            }
        )*
    };
}

impl Chart {
    /// The genre of the music.
    #[must_use]
    pub const fn genre(&self) -> Genre {
        self.genre
    }

    /// The path of the audio file.
    #[must_use]
    pub fn wave(&self) -> &str {
        &self.wave
    }

    /// The title of the music.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The subtitle of the music.
    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    /// The base tempo.
    #[must_use]
    pub const fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Seconds between the start of the audio and time zero of the chart.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Seconds into the audio where a preview begins.
    #[must_use]
    pub const fn demo_start(&self) -> f64 {
        self.demo_start
    }

    /// Returns whether the course of the difficulty slot is authored.
    #[must_use]
    pub fn has_course(&self, difficulty: Difficulty) -> bool {
        self.courses.contains_key(&difficulty)
    }

    /// The course stored in the difficulty slot.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DifficultyNotPresent`] if the course is not authored.
    pub fn course(&self, difficulty: Difficulty) -> Result<&Course> {
        self.courses
            .get(&difficulty)
            .ok_or(ModelError::DifficultyNotPresent(difficulty))
    }

    /// Iterates the authored courses with their slots, in ascending difficulty.
    pub fn courses(&self) -> impl Iterator<Item = (Difficulty, &Course)> {
        self.courses.iter().map(|(&slot, course)| (slot, course))
    }

    difficulty_accessors! {
        has_easy, easy => Easy;
        has_normal, normal => Normal;
        has_hard, hard => Hard;
        has_oni, oni => Oni;
        has_edit, edit => Edit;
    }

    /// Gets the header value of the name if it holds the type `T`.
    ///
    /// An absent header and a header of another type both give `None`.
    #[must_use]
    pub fn get<T: HeaderType + ?Sized>(&self, name: &str) -> Option<&T> {
        self.headers.get(name).and_then(T::from_header)
    }

    /// Gets the raw header value of the name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Iterates all the header fields in arbitrary order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}
