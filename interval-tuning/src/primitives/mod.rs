//! Values the rest of the crate is built from.
//!
//! Interval is a named exact ratio with its semitone size.
//! Attaching a Direction to it gives a DirectedInterval, and a Note is a
//! reference frequency followed by any amount of those.
//! PitchClass is the octave-less counterpart, stepping by semitones only.

pub mod fraction_tools;
pub mod interval;
pub mod note;
pub mod pitch_class;

pub use fraction_tools::{fraction_to_f64, reciprocal, unit, Ratio};
pub use interval::{
    Direction, DirectedInterval, Interval, IntervalClass, INTERVALS,
    MAJOR_SECOND, MAJOR_SEVENTH, MAJOR_SIXTH, MAJOR_THIRD, MINOR_SECOND,
    MINOR_SEVENTH, MINOR_SIXTH, MINOR_THIRD, OCTAVE, PERFECT_FIFTH,
    PERFECT_FOURTH, UNISON,
};
pub use note::Note;
pub use pitch_class::PitchClass;

/// Amount of semitones in octave, pitch classes wrap on it.
pub static SEMITONES_IN_OCTAVE: u8 = 12;
