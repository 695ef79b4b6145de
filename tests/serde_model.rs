#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use ttfs::prelude::*;

#[test]
fn test_chart_through_json() {
    let section = Section::new(
        vec![
            Note::new(NoteKind::Don, 150.0, 0.0, 1.0),
            Note::new(NoteKind::BigKatsu, 150.0, 0.4, 1.5),
        ],
        vec![Event::new(EventKind::GogoBegin, 0.0, 1.0)],
    );
    let chart = ChartBuilder::new()
        .genre(Genre::Anime)
        .title("Serialized")
        .course(
            Difficulty::Normal,
            Course::doubles(Difficulty::Normal, 4, section.clone(), section),
        )
        .header("BALLOON", "5,5")
        .header("SONGVOL", 100_i64)
        .build();

    let json = serde_json::to_string(&chart).expect("chart must serialize");
    let restored: Chart = serde_json::from_str(&json).expect("chart must deserialize");
    assert_eq!(restored, chart);
    assert_eq!(restored.get::<i64>("SONGVOL"), Some(&100));
}
