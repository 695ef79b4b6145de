//! The builder-facing constructor surface of [`Chart`].

use super::{Chart, Genre, HeaderValue};
use crate::course::{Course, Difficulty};

/// Builds a [`Chart`] step by step.
///
/// Unset attributes keep the defaults of [`Chart::default`]: unknown genre, empty texts, bpm
/// `120`, zero offset and demo start, no courses and no headers.
#[derive(Debug, Default, Clone)]
#[must_use]
pub struct ChartBuilder {
    chart: Chart,
}

impl ChartBuilder {
    /// Creates a new builder with the default attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the genre.
    pub fn genre(mut self, genre: Genre) -> Self {
        self.chart.genre = genre;
        self
    }

    /// Sets the path of the audio file.
    pub fn wave(mut self, wave: impl Into<String>) -> Self {
        self.chart.wave = wave.into();
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.chart.title = title.into();
        self
    }

    /// Sets the subtitle.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.chart.subtitle = subtitle.into();
        self
    }

    /// Sets the base tempo.
    pub fn bpm(mut self, bpm: f64) -> Self {
        self.chart.bpm = bpm;
        self
    }

    /// Sets the offset in seconds.
    pub fn offset(mut self, offset: f64) -> Self {
        self.chart.offset = offset;
        self
    }

    /// Sets the preview start in seconds.
    pub fn demo_start(mut self, demo_start: f64) -> Self {
        self.chart.demo_start = demo_start;
        self
    }

    /// Stores the course into the difficulty slot, replacing the previous one.
    ///
    /// The slot is not required to match [`Course::difficulty_type`].
    pub fn course(mut self, slot: Difficulty, course: Course) -> Self {
        if self.chart.courses.insert(slot, course).is_some() {
            log::debug!("course in slot {slot} was replaced");
        }
        self
    }

    /// Stores the course into the slot if it is `Some`, otherwise leaves the slot as is.
    pub fn maybe_course(self, slot: Difficulty, course: Option<Course>) -> Self {
        match course {
            Some(course) => self.course(slot, course),
            None => self,
        }
    }

    /// Adds the header field, replacing the previous value of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(older) = self.chart.headers.insert(name.clone(), value) {
            log::debug!("header {name:?} was replaced, older value: {older}");
        }
        self
    }

    /// Adds all the header fields, with the same replacement rule as [`ChartBuilder::header`].
    pub fn headers<N, V>(self, headers: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<HeaderValue>,
    {
        headers
            .into_iter()
            .fold(self, |builder, (name, value)| builder.header(name, value))
    }

    /// Finishes building the chart.
    #[must_use]
    pub fn build(self) -> Chart {
        log::trace!(
            "built chart {:?} with {} course(s) and {} header(s)",
            self.chart.title,
            self.chart.courses.len(),
            self.chart.headers.len()
        );
        self.chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;

    #[test]
    fn test_later_course_replaces_former() {
        let chart = ChartBuilder::new()
            .course(
                Difficulty::Hard,
                Course::single(Difficulty::Hard, 4, Section::default()),
            )
            .course(
                Difficulty::Hard,
                Course::single(Difficulty::Hard, 6, Section::default()),
            )
            .build();
        assert_eq!(chart.hard().map(Course::level), Ok(6));
        assert_eq!(chart.courses().count(), 1);
    }

    #[test]
    fn test_maybe_course() {
        let chart = ChartBuilder::new()
            .maybe_course(Difficulty::Easy, None)
            .maybe_course(
                Difficulty::Edit,
                Some(Course::single(Difficulty::Edit, 10, Section::default())),
            )
            .build();
        assert!(!chart.has_easy());
        assert!(chart.has_edit());
    }

    #[test]
    fn test_later_header_replaces_former() {
        let chart = ChartBuilder::new()
            .header("LEVEL", 3_i64)
            .headers([("LEVEL", "three"), ("MAKER", "me")])
            .build();
        assert_eq!(chart.get::<str>("LEVEL"), Some("three"));
        assert_eq!(chart.get::<i64>("LEVEL"), None);
        assert_eq!(chart.headers().count(), 2);
    }
}
