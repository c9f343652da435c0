use interval_tuning::{
    explore::{Combination, Selection},
    primitives::{IntervalClass, PitchClass, INTERVALS},
    report::{tone_report, RenderSettings, RendersText},
    tables, IntonationError,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn a_up_perfect_fifth() {
    init_logger();
    let tables = tables::init();
    let selection = Selection::parse("A", "Perfect Fifth", "up").unwrap();
    let exploration = selection.explore(&tables.just);
    assert_eq!(exploration.result, PitchClass::E);
    let a4 = exploration
        .matches
        .iter()
        .find(|found| found.root_name == "A4")
        .unwrap();
    assert_eq!(format!("{:.4}", a4.root_hz()), "440.0000");
    assert_eq!(format!("{:.4}", a4.result_hz()), "660.0000");
    assert_eq!(a4.nearest_name, "E5");
    assert_eq!(a4.nearest_hz(), tables.just.lookup("E5").unwrap().frequency());
}

#[test]
fn every_selection_is_total() {
    init_logger();
    let tables = tables::get();
    for class in PitchClass::ALL {
        for interval in INTERVALS {
            for direction in ["up", "down"] {
                let selection =
                    Selection::parse(class.label(), interval.name(), direction)
                        .unwrap();
                let exploration = selection.explore(&tables.just);
                assert!(!exploration.matches.is_empty(), "{class}");
                for found in exploration.matches {
                    assert_eq!(
                        PitchClass::of_tone(found.root_name),
                        Ok(class)
                    );
                    assert_eq!(found.result_name, exploration.result);
                }
            }
        }
    }
}

#[test]
fn invalid_direction_is_rejected() {
    assert_eq!(
        Selection::parse("A", "Octave", "UP"),
        Err(IntonationError::InvalidDirection("UP".to_string()))
    );
}

#[test]
fn combine_selected_intervals() {
    let combined =
        Combination::of_names(["Major Third", "Minor Third"]).unwrap();
    assert_eq!(combined.semitones, 7);
    assert_eq!(combined.interval.name(), "Perfect Fifth");

    let tritone = Combination::of_names(["Minor Third", "Minor Third"]).unwrap();
    assert_eq!(tritone.interval, IntervalClass::Tritone);

    let unison = Combination::of_names(Vec::<String>::new()).unwrap();
    assert_eq!(unison.semitones, 0);
    assert_eq!(unison.interval.name(), "Unison");
}

#[test]
fn full_tone_dump() {
    init_logger();
    let rows = tone_report(tables::get()).unwrap();
    assert_eq!(rows.len(), 28);
    let text = rows.render_text(&RenderSettings::default());
    assert!(text
        .lines()
        .any(|line| line.starts_with("E5 | A440 * 3/2 | 660.0000 | 659.2551")));
}
