//! Twelve-tone equal temperament around A4.
use log::debug;

use crate::{primitives::SEMITONES_IN_OCTAVE, IntonationError, IntonationResult};

use super::{ToneName, REFERENCE_HZ};

/// Frequency of the tone `semitones` away from A4.
///
/// # Example
/// ```
/// # use interval_tuning::tables::equal_frequency;
/// assert_eq!(equal_frequency(0), 440.0);
/// assert!((equal_frequency(12) - 880.0).abs() < 1e-9);
/// ```
pub fn equal_frequency(semitones: i32) -> f64 {
    REFERENCE_HZ as f64
        * 2f64.powf(semitones as f64 / SEMITONES_IN_OCTAVE as f64)
}

/// Name → semitone offset from A4, in declaration order.
///
/// Holds the same names as [super::JustTones], plus `D♯4/E♭4`, which has no
/// just chain.
#[derive(Debug, Clone)]
pub struct EqualTones {
    entries: Vec<(ToneName, i32)>,
}
impl EqualTones {
    pub fn build() -> Self {
        let names = [
            "G3", "G♯3/A♭3", "A3", "A♯3/B♭3", "B3", "C3", "C♯3/D♭4", "D4",
            "D♯4/E♭4", "E4", "F4", "F♯4/G♭4", "G4", "G♯4/A♭4", "A4",
            "A♯4/B♭4", "B4", "C4", "C♯4/D♭5", "D5", "D♯5/E♭5", "E5", "F5",
            "F♯5/G♭5", "G5", "G♯5/A♭5", "A5", "A♯5/B♭5", "B5",
        ];
        let entries = names.into_iter().zip(-14..).collect::<Vec<_>>();
        debug!("built equal tones table with {} entries", entries.len());
        Self { entries }
    }

    pub fn offset(&self, name: &str) -> IntonationResult<i32> {
        self.entries
            .iter()
            .find(|(tone, _)| *tone == name)
            .map(|(_, offset)| *offset)
            .ok_or(IntonationError::UnknownTone(name.to_string()))
    }
    pub fn frequency(&self, name: &str) -> IntonationResult<f64> {
        Ok(equal_frequency(self.offset(name)?))
    }

    /// Names with frequencies.
    pub fn iter(&self) -> impl Iterator<Item = (ToneName, f64)> + '_ {
        self.entries
            .iter()
            .map(|(name, offset)| (*name, equal_frequency(*offset)))
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
