use std::{fmt::Display, str::FromStr};

use crate::{IntonationError, IntonationResult};

use super::{Direction, Interval, SEMITONES_IN_OCTAVE};

/// Note name without octave. Enharmonics share one class.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}
impl PitchClass {
    /// Chromatic order, starting from C.
    pub const ALL: [PitchClass; 12] = [
        Self::C,
        Self::CSharp,
        Self::D,
        Self::DSharp,
        Self::E,
        Self::F,
        Self::FSharp,
        Self::G,
        Self::GSharp,
        Self::A,
        Self::ASharp,
        Self::B,
    ];

    pub fn index(&self) -> u8 {
        *self as u8
    }
    /// Index is wrapped by octave.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(SEMITONES_IN_OCTAVE as i64) as usize]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C♯/D♭",
            Self::D => "D",
            Self::DSharp => "D♯/E♭",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F♯/G♭",
            Self::G => "G",
            Self::GSharp => "G♯/A♭",
            Self::A => "A",
            Self::ASharp => "A♯/B♭",
            Self::B => "B",
        }
    }

    /// Step by interval size, ignoring its ratio.
    ///
    /// # Example
    /// ```
    /// # use interval_tuning::primitives::{Direction, PitchClass, MINOR_SECOND};
    /// assert_eq!(
    ///     PitchClass::C.shift(MINOR_SECOND, Direction::Down),
    ///     PitchClass::B
    /// );
    /// ```
    pub fn shift(&self, interval: Interval, direction: Direction) -> Self {
        let delta = interval.directed(direction).semitone_delta();
        Self::from_index(self.index() as i64 + delta)
    }

    /// Pitch class of the tone name, like `A4` or `C♯3/D♭4`.
    ///
    /// Octave digits are dropped, the rest should be a [PitchClass::label].
    pub fn of_tone(tone_name: &str) -> IntonationResult<Self> {
        let label = tone_name
            .chars()
            .filter(|ch| !ch.is_ascii_digit())
            .collect::<String>();
        label
            .parse()
            .map_err(|_| IntonationError::UnknownPitchClass(tone_name.to_string()))
    }
}
impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
impl FromStr for PitchClass {
    type Err = IntonationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.label() == s)
            .ok_or(IntonationError::UnknownPitchClass(s.to_string()))
    }
}
