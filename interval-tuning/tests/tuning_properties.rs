use interval_tuning::{
    primitives::{
        unit, Direction, Note, PitchClass, Ratio, INTERVALS, MAJOR_SECOND, MINOR_SECOND,
        PERFECT_FIFTH,
    },
    tables::{self, equal_frequency, JustTones},
};

#[test]
fn direction_does_not_change_ratio() {
    for interval in INTERVALS {
        assert_eq!(interval.up().ratio(), interval.down().ratio());
    }
}

#[test]
fn up_down_identity_on_every_table_tone() {
    let tones = JustTones::build();
    for (name, note) in tones.iter() {
        for interval in INTERVALS {
            assert_eq!(
                note.up(interval).down(interval).frequency(),
                note.frequency(),
                "{name} by {interval}"
            );
            assert_eq!(
                note.down(interval).up(interval).exact_frequency(),
                note.exact_frequency(),
                "{name} by {interval}"
            );
        }
    }
}

#[test]
fn two_fifths() {
    let note = Note::from_hz("A4", 440).up(PERFECT_FIFTH).up(PERFECT_FIFTH);
    assert_eq!(note.cumulative_ratio(), Ratio::new(9u64, 4u64));
}

#[test]
fn long_chains_return_to_reference() {
    let a4 = Note::from_hz("A4", 440);
    for interval in INTERVALS {
        let mut up_first = a4.clone();
        let mut down_first = a4.clone();
        for _ in 0..64 {
            up_first = up_first.up(interval);
            down_first = down_first.down(interval);
        }
        assert!(up_first.frequency() > 440.0, "{interval}");
        assert!(down_first.frequency() < 440.0, "{interval}");
        for _ in 0..64 {
            up_first = up_first.down(interval);
            down_first = down_first.up(interval);
        }
        for note in [&up_first, &down_first] {
            assert_eq!(note.cumulative_ratio(), unit(), "{interval}");
            assert_eq!(note.frequency(), 440.0, "{interval}");
        }
    }

    // every interval in turn, six rounds, then unwound in reverse
    let path = INTERVALS.iter().cycle().take(INTERVALS.len() * 6).collect::<Vec<_>>();
    let there = path.iter().fold(a4.clone(), |note, interval| note.up(**interval));
    let back = path.iter().rev().fold(there, |note, interval| note.down(**interval));
    assert_eq!(back.cumulative_ratio(), unit());
    assert_eq!(back.exact_frequency(), Ratio::new(440u64, 1u64));
}

#[test]
fn reference_octaves() {
    let tables = tables::init();
    assert_eq!(tables.just.lookup("A4").unwrap().frequency(), 440.0);
    assert_eq!(tables.just.lookup("A5").unwrap().frequency(), 880.0);
    assert_eq!(equal_frequency(0), 440.0);
    assert!((equal_frequency(12) - 880.0).abs() <= 880.0 * 1e-9);
}

#[test]
fn nearest_to_reference() {
    let tables = tables::get();
    let (name, note) = tables.just.nearest(440.0).unwrap();
    assert_eq!(name, "A4");
    assert_eq!(note, tables.just.lookup("A4").unwrap());
}

#[test]
fn pitch_class_steps() {
    assert_eq!(PitchClass::C.shift(MAJOR_SECOND, Direction::Up), PitchClass::D);
    assert_eq!(PitchClass::C.shift(MINOR_SECOND, Direction::Down), PitchClass::B);
}

#[test]
fn just_and_equal_stay_close() {
    let tables = tables::get();
    // G4 is charted as A4 up a fourth, so it sounds as D5.
    assert_eq!(
        tables.just.lookup("G4").unwrap().frequency(),
        tables.just.lookup("D5").unwrap().frequency()
    );
    for (name, note) in tables.just.iter().filter(|(name, _)| *name != "G4") {
        let equal = tables.equal.frequency(name).unwrap();
        let semitones = 12.0 * (note.frequency() / equal).log2();
        assert!(semitones.abs() < 0.35, "{name}: {semitones}");
    }
}
