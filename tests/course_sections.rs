use pretty_assertions::assert_eq;
use ttfs::prelude::*;

fn section_of(kinds: &[NoteKind]) -> Section {
    let notes = kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| Note::new(kind, 120.0, i as f64 * 0.25, 1.0))
        .collect();
    Section::new(notes, vec![Event::new(EventKind::Measure, 0.0, 1.0)])
}

#[test]
fn test_don_katsu_rest_section() {
    let section = section_of(&[NoteKind::Don, NoteKind::Katsu, NoteKind::Rest]);
    assert_eq!(section.don_count(), 1);
    assert_eq!(section.katsu_count(), 1);
    assert_eq!(section.note_count(), 3);
    assert_eq!(section.event_count(), 1);
}

#[test]
fn test_every_note_counted_once() {
    use NoteKind::*;
    let sections = [
        section_of(&[]),
        section_of(&[Rest, Rest]),
        section_of(&[Don, BigDon, Katsu, BigKatsu, Rest]),
        section_of(&[BigKatsu, BigKatsu, Don, Rest, Katsu, BigDon, Don]),
    ];
    for section in &sections {
        let others = section
            .notes()
            .iter()
            .filter(|note| !note.kind.is_don() && !note.kind.is_katsu())
            .count();
        assert_eq!(
            section.don_count() + others + section.katsu_count(),
            section.note_count()
        );
    }
}

#[test]
fn test_single_course_has_no_second_player() {
    let section = section_of(&[NoteKind::Don]);
    let course = Course::single(Difficulty::Normal, 3, section.clone());
    assert!(!course.has_doubles());
    assert_eq!(course.player1_section(), &section);
    assert_eq!(course.player2_section(), Err(ModelError::NoSecondPlayer));
    assert_eq!(
        course.section(PlayerSide::Player2),
        Err(ModelError::NoSecondPlayer)
    );
    assert!(matches!(course.body(), CourseBody::Single(_)));
}

#[test]
fn test_doubles_course_sections_are_distinct() {
    let p1 = section_of(&[NoteKind::Don, NoteKind::Don]);
    let p2 = section_of(&[NoteKind::Katsu]);
    let course = Course::doubles(Difficulty::Oni, 7, p1.clone(), p2.clone());
    assert!(course.has_doubles());

    let first = course.player1_section();
    let second = course
        .player2_section()
        .expect("doubles course has the second player");
    assert_eq!(first, &p1);
    assert_eq!(second, &p2);
    assert!(!std::ptr::eq(first, second));
}

#[test]
fn test_doubles_with_equal_sections_are_still_two_objects() {
    let section = section_of(&[NoteKind::BigDon]);
    let course = Course::new(
        Difficulty::Edit,
        9,
        CourseBody::Doubles(section.clone(), section),
    );
    let first = course.player1_section();
    let second = course
        .player2_section()
        .expect("doubles course has the second player");
    assert_eq!(first, second);
    assert!(!std::ptr::eq(first, second));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ModelError::NoSecondPlayer.to_string(),
        "the course has no section for the second player"
    );
    assert_eq!(
        ModelError::DifficultyNotPresent(Difficulty::Oni).to_string(),
        "the chart has no oni course"
    );
}
