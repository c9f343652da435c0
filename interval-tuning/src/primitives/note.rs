//! Note, as a reference pitch moved by a chain of intervals.
use std::fmt::Display;

use log::trace;

use super::{
    fraction_to_f64, unit, DirectedInterval, Direction, Interval, Ratio,
};

/// Reference frequency and ordered shifts from it.
///
/// Shifting returns a new Note, so every earlier Note in a chain stays valid.
/// Frequency and ratio are folded on demand and stay exact until
/// [Note::frequency] converts them to float.
#[derive(Debug, PartialEq, Clone)]
pub struct Note {
    name: String,
    reference: Ratio,
    shifts: Vec<DirectedInterval>,
}
impl Note {
    /// # Panics
    ///
    /// If reference frequency is not positive.
    pub fn new(name: impl Into<String>, reference: Ratio) -> Self {
        let name = name.into();
        assert!(
            reference > Ratio::new(0u64, 1u64),
            "reference frequency of {name} should be positive, got {reference}"
        );
        Self {
            name,
            reference,
            shifts: Vec::new(),
        }
    }
    pub fn from_hz(name: impl Into<String>, hz: u64) -> Self {
        Self::new(name, Ratio::new(hz, 1u64))
    }

    /// Name of the reference, not of the resulting pitch.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Reference frequency in Hz.
    pub fn reference(&self) -> &Ratio {
        &self.reference
    }
    pub fn shifts(&self) -> &[DirectedInterval] {
        &self.shifts
    }

    /// Same Note, with one more shift appended.
    pub fn shift(&self, shift: DirectedInterval) -> Self {
        let mut shifts = self.shifts.clone();
        shifts.push(shift);
        Self {
            name: self.name.clone(),
            reference: self.reference.clone(),
            shifts,
        }
    }
    pub fn up(&self, interval: Interval) -> Self {
        self.shift(interval.up())
    }
    pub fn down(&self, interval: Interval) -> Self {
        self.shift(interval.down())
    }
    pub fn directed(&self, interval: Interval, direction: Direction) -> Self {
        self.shift(interval.directed(direction))
    }

    /// Product of all shifts, starting from 1/1.
    ///
    /// # Example
    /// ```
    /// # use interval_tuning::primitives::{Note, Ratio, PERFECT_FIFTH};
    /// let note = Note::from_hz("A4", 440).up(PERFECT_FIFTH).up(PERFECT_FIFTH);
    /// assert_eq!(note.cumulative_ratio(), Ratio::new(9u64, 4u64));
    /// ```
    pub fn cumulative_ratio(&self) -> Ratio {
        self.shifts
            .iter()
            .fold(unit(), |ratio, shift| ratio * shift.effective_ratio())
    }

    /// Frequency in Hz, as exact fraction.
    pub fn exact_frequency(&self) -> Ratio {
        self.shifts
            .iter()
            .fold(self.reference.clone(), |freq, shift| freq * shift.effective_ratio())
    }

    /// Frequency in Hz.
    pub fn frequency(&self) -> f64 {
        fraction_to_f64(&self.exact_frequency())
    }

    /// Human-readable way the frequency was got.
    ///
    /// # Example
    /// ```
    /// # use interval_tuning::primitives::{Note, OCTAVE, PERFECT_FIFTH};
    /// let e4 = Note::from_hz("A4", 440).up(PERFECT_FIFTH).down(OCTAVE);
    /// assert_eq!(
    ///     e4.derivation(),
    ///     "A4 (440) ⬆️ Perfect Fifth ⬇️ Octave = 3/2 * 1/2 = 3/4"
    /// );
    /// assert_eq!(Note::from_hz("A4", 440).derivation(), "A4 (440)");
    /// ```
    pub fn derivation(&self) -> String {
        let reference =
            format!("{} ({})", self.name, self.reference);
        if self.shifts.is_empty() {
            return reference;
        }
        let names = self
            .shifts
            .iter()
            .map(|shift| shift.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let ratios = self
            .shifts
            .iter()
            .map(|shift| shift.effective_ratio().to_string())
            .collect::<Vec<_>>()
            .join(" * ");
        let derivation = format!(
            "{reference} {names} = {ratios} = {}",
            self.cumulative_ratio()
        );
        trace!("derived: {derivation}");
        derivation
    }
}
impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.derivation())
    }
}
