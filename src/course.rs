//! Definitions of the difficulty course and its playable content.
//!
//! A [`Course`] is either [`CourseBody::Single`], played by one player, or [`CourseBody::Doubles`],
//! authored separately for two simultaneous players. Which shape a course has is decided by its
//! constructor and cannot change afterwards.

use std::str::FromStr;

use thiserror::Error;

use crate::{
    error::{ModelError, Result},
    section::Section,
};

/// A difficulty slot of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// The easiest course, course code `0`.
    Easy,
    /// Course code `1`.
    Normal,
    /// Course code `2`.
    Hard,
    /// The hardest regular course, course code `3`.
    Oni,
    /// The extra (ura) course, course code `4`.
    Edit,
}

impl Difficulty {
    /// All the difficulties in ascending order.
    pub const ALL: [Self; 5] = [Self::Easy, Self::Normal, Self::Hard, Self::Oni, Self::Edit];

    /// The numeric course code of the difficulty.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Gets the difficulty from the numeric course code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Easy),
            1 => Some(Self::Normal),
            2 => Some(Self::Hard),
            3 => Some(Self::Oni),
            4 => Some(Self::Edit),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Normal => write!(f, "normal"),
            Self::Hard => write!(f, "hard"),
            Self::Oni => write!(f, "oni"),
            Self::Edit => write!(f, "edit"),
        }
    }
}

/// An error occurred when parsing a [`Difficulty`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unknown difficulty: {0:?}")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Accepts the names case-insensitively, and the course codes `0` to `4`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(difficulty) = trimmed.parse::<u8>().ok().and_then(Self::from_code) {
            return Ok(difficulty);
        }
        Self::ALL
            .into_iter()
            .find(|difficulty| trimmed.eq_ignore_ascii_case(&difficulty.to_string()))
            .ok_or_else(|| ParseDifficultyError(s.to_owned()))
    }
}

/// A side of the player in the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerSide {
    /// The first player, or the only player of a single course.
    Player1,
    /// The second player of a doubles course.
    Player2,
}

impl std::fmt::Display for PlayerSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player1 => write!(f, "P1"),
            Self::Player2 => write!(f, "P2"),
        }
    }
}

/// The playable content of a course.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CourseBody {
    /// One section for one player.
    Single(Section),
    /// Sections for the first and the second player.
    Doubles(Section, Section),
}

/// One difficulty of the chart, with its metadata and content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    difficulty: Difficulty,
    level: u8,
    score_init: u32,
    score_diff: u32,
    body: CourseBody,
}

impl Course {
    /// Creates a new course with zero score constants.
    #[must_use]
    pub fn new(difficulty: Difficulty, level: u8, body: CourseBody) -> Self {
        Self {
            difficulty,
            level,
            score_init: 0,
            score_diff: 0,
            body,
        }
    }

    /// Creates a new course played by one player.
    #[must_use]
    pub fn single(difficulty: Difficulty, level: u8, section: Section) -> Self {
        Self::new(difficulty, level, CourseBody::Single(section))
    }

    /// Creates a new course with the sections for two players.
    #[must_use]
    pub fn doubles(difficulty: Difficulty, level: u8, p1: Section, p2: Section) -> Self {
        Self::new(difficulty, level, CourseBody::Doubles(p1, p2))
    }

    /// Sets the score constants, the initial score and the score increase per combo step.
    #[must_use]
    pub fn with_scores(mut self, score_init: u32, score_diff: u32) -> Self {
        self.score_init = score_init;
        self.score_diff = score_diff;
        self
    }

    /// The difficulty recorded in the course itself.
    ///
    /// This is independent from the slot the course is stored in a [`Chart`](crate::chart::Chart).
    #[must_use]
    pub const fn difficulty_type(&self) -> Difficulty {
        self.difficulty
    }

    /// The level (stars) of the course.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// The initial score per note.
    #[must_use]
    pub const fn score_init(&self) -> u32 {
        self.score_init
    }

    /// The score increase per combo step.
    #[must_use]
    pub const fn score_diff(&self) -> u32 {
        self.score_diff
    }

    /// The playable content.
    #[must_use]
    pub const fn body(&self) -> &CourseBody {
        &self.body
    }

    /// Returns whether the course has the section for the second player.
    #[must_use]
    pub const fn has_doubles(&self) -> bool {
        matches!(self.body, CourseBody::Doubles(..))
    }

    /// The section of the first player, that is the only section of a single course.
    #[must_use]
    pub const fn player1_section(&self) -> &Section {
        match &self.body {
            CourseBody::Single(section) | CourseBody::Doubles(section, _) => section,
        }
    }

    /// The section of the second player.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoSecondPlayer`] if the course is not a doubles course.
    pub const fn player2_section(&self) -> Result<&Section> {
        match &self.body {
            CourseBody::Doubles(_, section) => Ok(section),
            CourseBody::Single(_) => Err(ModelError::NoSecondPlayer),
        }
    }

    /// Gets the section of the player side.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoSecondPlayer`] if [`PlayerSide::Player2`] is requested on a single course.
    pub const fn section(&self, side: PlayerSide) -> Result<&Section> {
        match side {
            PlayerSide::Player1 => Ok(self.player1_section()),
            PlayerSide::Player2 => self.player2_section(),
        }
    }

    /// Iterates the sections with their player sides, one for a single course and two for a doubles course.
    pub fn sections(&self) -> impl Iterator<Item = (PlayerSide, &Section)> {
        let (p1, p2) = match &self.body {
            CourseBody::Single(p1) => (p1, None),
            CourseBody::Doubles(p1, p2) => (p1, Some(p2)),
        };
        std::iter::once((PlayerSide::Player1, p1))
            .chain(p2.map(|section| (PlayerSide::Player2, section)))
    }
}
