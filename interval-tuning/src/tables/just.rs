//! Five-limit tones around A4.
//!
//! Every entry is a literal chain of shifts from A4. Just intonation has no
//! uniform semitone, so the chains are data and can not be computed from pitch
//! classes. Names are kept as they are spelled on the original chart, including
//! its octave numbering.
use log::{debug, trace};

use crate::{
    primitives::{
        Note, MAJOR_SECOND, MAJOR_THIRD, MINOR_SECOND, MINOR_SIXTH,
        MINOR_THIRD, OCTAVE, PERFECT_FIFTH, PERFECT_FOURTH,
    },
    IntonationError, IntonationResult,
};

use super::{reference_note, ToneName};

/// Name → Note, in declaration order.
#[derive(Debug, Clone)]
pub struct JustTones {
    entries: Vec<(ToneName, Note)>,
}
impl JustTones {
    pub fn build() -> Self {
        let a4 = reference_note();
        let entries = vec![
            ("G3", a4.down(PERFECT_FIFTH).down(PERFECT_FIFTH)),
            (
                "G♯3/A♭3",
                a4.down(PERFECT_FIFTH).down(PERFECT_FIFTH).up(MINOR_SECOND),
            ),
            ("A3", a4.down(OCTAVE)),
            ("A♯3/B♭3", a4.down(OCTAVE).up(MINOR_SECOND)),
            (
                "B3",
                a4.down(PERFECT_FIFTH).down(PERFECT_FIFTH).up(MAJOR_THIRD),
            ),
            (
                "C3",
                a4.down(PERFECT_FIFTH).down(PERFECT_FIFTH).up(PERFECT_FOURTH),
            ),
            ("C♯3/D♭4", a4.down(PERFECT_FIFTH).down(MINOR_SECOND)),
            ("D4", a4.down(PERFECT_FIFTH)),
            ("E4", a4.up(PERFECT_FIFTH).down(OCTAVE)),
            ("F4", a4.down(PERFECT_FIFTH).up(MINOR_THIRD)),
            ("F♯4/G♭4", a4.down(PERFECT_FIFTH).up(MAJOR_THIRD)),
            ("G4", a4.up(PERFECT_FOURTH)),
            ("G♯4/A♭4", a4.down(MINOR_SECOND)),
            ("A4", a4.clone()),
            ("A♯4/B♭4", a4.up(MINOR_SECOND)),
            ("B4", a4.up(MAJOR_SECOND)),
            ("C4", a4.up(MINOR_THIRD)),
            ("C♯4/D♭5", a4.up(MAJOR_THIRD)),
            ("D5", a4.up(PERFECT_FOURTH)),
            (
                "D♯5/E♭5",
                a4.down(PERFECT_FIFTH).up(OCTAVE).up(MINOR_SECOND),
            ),
            ("E5", a4.up(PERFECT_FIFTH)),
            ("F5", a4.up(MINOR_SIXTH)),
            ("F♯5/G♭5", a4.up(PERFECT_FIFTH).up(MAJOR_SECOND)),
            (
                "G5",
                a4.down(PERFECT_FIFTH)
                    .down(PERFECT_FIFTH)
                    .up(OCTAVE)
                    .up(OCTAVE),
            ),
            ("G♯5/A♭5", a4.up(OCTAVE).down(MINOR_SECOND)),
            ("A5", a4.up(OCTAVE)),
            ("A♯5/B♭5", a4.up(OCTAVE).up(MINOR_SECOND)),
            ("B5", a4.up(OCTAVE).up(MAJOR_SECOND)),
        ];
        for (name, note) in entries.iter() {
            trace!("just tone {name}: {:.4} Hz", note.frequency());
        }
        debug!("built just tones table with {} entries", entries.len());
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> IntonationResult<&Note> {
        self.entries
            .iter()
            .find(|(tone, _)| *tone == name)
            .map(|(_, note)| note)
            .ok_or(IntonationError::UnknownTone(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToneName, &Note)> {
        self.entries.iter().map(|(name, note)| (*name, note))
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tone with the smallest distance in Hz to the given frequency.
    ///
    /// On equal distances the earlier entry wins. None only for empty table.
    ///
    /// # Example
    /// ```
    /// # use interval_tuning::tables::JustTones;
    /// let tones = JustTones::build();
    /// let (name, note) = tones.nearest(445.0).unwrap();
    /// assert_eq!(name, "A4");
    /// assert_eq!(note.frequency(), 440.0);
    /// ```
    pub fn nearest(&self, hz: f64) -> Option<(ToneName, &Note)> {
        let mut nearest: Option<(ToneName, &Note, f64)> = None;
        for (name, note) in self.iter() {
            let delta = (note.frequency() - hz).abs();
            if nearest.map_or(true, |(_, _, min_delta)| delta < min_delta) {
                nearest = Some((name, note, delta));
            }
        }
        if let Some((name, _, delta)) = nearest {
            trace!("nearest to {hz} Hz is {name}, {delta:.4} Hz away");
        }
        nearest.map(|(name, note, _)| (name, note))
    }
}
