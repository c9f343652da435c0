//! Closed catalog of five-limit intervals.
use std::{fmt::Display, str::FromStr};

use crate::{IntonationError, IntonationResult};

use super::{reciprocal, Ratio, SEMITONES_IN_OCTAVE};

/// Named interval with exact frequency ratio.
///
/// Never mutated: directions are attached by [Interval::up] and
/// [Interval::down], which produce [DirectedInterval].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Interval {
    name: &'static str,
    numer: u64,
    denom: u64,
    semitones: u8,
}
impl Interval {
    const fn new(
        name: &'static str,
        numer: u64,
        denom: u64,
        semitones: u8,
    ) -> Self {
        Self {
            name,
            numer,
            denom,
            semitones,
        }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn ratio(&self) -> Ratio {
        Ratio::new(self.numer, self.denom)
    }
    pub fn semitones(&self) -> u8 {
        self.semitones
    }

    /// Name, size and ratio, like `Perfect Fifth (7 Semitones, 3/2)`.
    pub fn label(&self) -> String {
        format!(
            "{} ({} Semitones, {})",
            self.name,
            self.semitones,
            self.ratio()
        )
    }

    pub fn up(self) -> DirectedInterval {
        DirectedInterval::new(self, Direction::Up)
    }
    pub fn down(self) -> DirectedInterval {
        DirectedInterval::new(self, Direction::Down)
    }
    pub fn directed(self, direction: Direction) -> DirectedInterval {
        DirectedInterval::new(self, direction)
    }

    /// Find catalog interval, that matches size in semitones.
    ///
    /// Size is reduced modulo octave first, so 12 gives Unison, and -5 gives
    /// Perfect Fifth. Six semitones is the [IntervalClass::Tritone], which has
    /// no ratio in five-limit catalog.
    ///
    /// # Example
    /// ```
    /// # use interval_tuning::primitives::{Interval, IntervalClass, MAJOR_THIRD};
    /// assert_eq!(
    ///     Interval::from_semitones(16).unwrap(),
    ///     IntervalClass::Interval(MAJOR_THIRD)
    /// );
    /// assert_eq!(Interval::from_semitones(6).unwrap(), IntervalClass::Tritone);
    /// ```
    pub fn from_semitones(semitones: i64) -> IntonationResult<IntervalClass> {
        let reduced = semitones.rem_euclid(SEMITONES_IN_OCTAVE as i64) as u8;
        if reduced == TRITONE_SEMITONES {
            return Ok(IntervalClass::Tritone);
        }
        std::iter::once(&UNISON)
            .chain(INTERVALS.iter())
            .find(|interval| interval.semitones == reduced)
            .map(|interval| IntervalClass::Interval(*interval))
            .ok_or(IntonationError::UnknownInterval(format!(
                "{semitones} semitones"
            )))
    }
}
impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
/// Accepts both plain name and [Interval::label].
impl FromStr for Interval {
    type Err = IntonationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        std::iter::once(&UNISON)
            .chain(INTERVALS.iter())
            .find(|interval| interval.name == s || interval.label() == s)
            .copied()
            .ok_or(IntonationError::UnknownInterval(s.to_string()))
    }
}

const TRITONE_SEMITONES: u8 = 6;

pub const UNISON: Interval = Interval::new("Unison", 1, 1, 0);
pub const MINOR_SECOND: Interval = Interval::new("Minor Second", 16, 15, 1);
pub const MAJOR_SECOND: Interval = Interval::new("Major Second", 9, 8, 2);
pub const MINOR_THIRD: Interval = Interval::new("Minor Third", 6, 5, 3);
pub const MAJOR_THIRD: Interval = Interval::new("Major Third", 5, 4, 4);
pub const PERFECT_FOURTH: Interval = Interval::new("Perfect Fourth", 4, 3, 5);
pub const PERFECT_FIFTH: Interval = Interval::new("Perfect Fifth", 3, 2, 7);
pub const MINOR_SIXTH: Interval = Interval::new("Minor Sixth", 8, 5, 8);
pub const MAJOR_SIXTH: Interval = Interval::new("Major Sixth", 5, 3, 9);
pub const MINOR_SEVENTH: Interval = Interval::new("Minor Seventh", 9, 5, 10);
pub const MAJOR_SEVENTH: Interval = Interval::new("Major Seventh", 15, 8, 11);
pub const OCTAVE: Interval = Interval::new("Octave", 2, 1, 12);

/// Intervals, offered for selection, in ascending order.
///
/// Unison is not here, but is still found by lookups.
pub const INTERVALS: [Interval; 11] = [
    MINOR_SECOND,
    MAJOR_SECOND,
    MINOR_THIRD,
    MAJOR_THIRD,
    PERFECT_FOURTH,
    PERFECT_FIFTH,
    MINOR_SIXTH,
    MAJOR_SIXTH,
    MINOR_SEVENTH,
    MAJOR_SEVENTH,
    OCTAVE,
];

/// Result of reducing semitones back to the catalog.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum IntervalClass {
    Interval(Interval),
    /// 6 semitones: no five-limit ratio for it.
    Tritone,
}
impl IntervalClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Interval(interval) => interval.name(),
            Self::Tritone => "Tritone",
        }
    }
    pub fn semitones(&self) -> u8 {
        match self {
            Self::Interval(interval) => interval.semitones(),
            Self::Tritone => TRITONE_SEMITONES,
        }
    }
}
impl Display for IntervalClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interval(interval) => write!(f, "{interval}"),
            Self::Tritone => write!(f, "{}", self.name()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
}
impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}
impl FromStr for Direction {
    type Err = IntonationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            x => Err(IntonationError::InvalidDirection(x.to_string())),
        }
    }
}

/// Interval, tagged by direction it should be applied in.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct DirectedInterval {
    pub interval: Interval,
    pub direction: Direction,
}
impl DirectedInterval {
    pub fn new(interval: Interval, direction: Direction) -> Self {
        Self {
            interval,
            direction,
        }
    }
    pub fn name(&self) -> &'static str {
        self.interval.name()
    }
    /// Stored ratio of interval, independent of direction.
    pub fn ratio(&self) -> Ratio {
        self.interval.ratio()
    }
    /// Ratio, frequency is multiplied by: inverted for down shift.
    pub fn effective_ratio(&self) -> Ratio {
        match self.direction {
            Direction::Up => self.ratio(),
            Direction::Down => reciprocal(self.ratio()),
        }
    }
    /// Signed distance in semitones.
    pub fn semitone_delta(&self) -> i64 {
        let semitones = self.interval.semitones() as i64;
        match self.direction {
            Direction::Up => semitones,
            Direction::Down => -semitones,
        }
    }
}
impl Display for DirectedInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = match self.direction {
            Direction::Up => "⬆️",
            Direction::Down => "⬇️",
        };
        write!(f, "{arrow} {}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ratios_match_semitones() {
        let mut previous = UNISON;
        for interval in INTERVALS {
            assert!(interval.semitones() > previous.semitones());
            assert!(interval.ratio() > previous.ratio());
            previous = interval;
        }
        assert_eq!(OCTAVE.ratio(), Ratio::new(2u64, 1u64));
    }

    #[test]
    fn direction_keeps_ratio() {
        for interval in INTERVALS {
            assert_eq!(interval.up().ratio(), interval.down().ratio());
            assert_eq!(
                interval.up().effective_ratio() * interval.down().effective_ratio(),
                Ratio::new(1u64, 1u64)
            );
        }
        assert_eq!(
            MINOR_SECOND.down().effective_ratio(),
            Ratio::new(15u64, 16u64)
        );
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!("Perfect Fifth".parse::<Interval>(), Ok(PERFECT_FIFTH));
        assert_eq!(
            "Perfect Fifth (7 Semitones, 3/2)".parse::<Interval>(),
            Ok(PERFECT_FIFTH)
        );
        assert_eq!("Unison".parse::<Interval>(), Ok(UNISON));
        assert_eq!(
            "Augmented Fourth".parse::<Interval>(),
            Err(IntonationError::UnknownInterval(
                "Augmented Fourth".to_string()
            ))
        );
    }

    #[test]
    fn lookup_by_semitones() {
        assert_eq!(
            Interval::from_semitones(7),
            Ok(IntervalClass::Interval(PERFECT_FIFTH))
        );
        assert_eq!(
            Interval::from_semitones(12),
            Ok(IntervalClass::Interval(UNISON))
        );
        assert_eq!(
            Interval::from_semitones(-1),
            Ok(IntervalClass::Interval(MAJOR_SEVENTH))
        );
        assert_eq!(Interval::from_semitones(18), Ok(IntervalClass::Tritone));
        assert_eq!(IntervalClass::Tritone.to_string(), "Tritone");
    }

    #[test]
    fn direction_parse() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(IntonationError::InvalidDirection("sideways".to_string()))
        );
    }

    #[test]
    fn labels() {
        assert_eq!(MINOR_SECOND.label(), "Minor Second (1 Semitones, 16/15)");
        assert_eq!(OCTAVE.to_string(), "Octave (12 Semitones, 2)");
        assert_eq!(PERFECT_FOURTH.down().to_string(), "⬇️ Perfect Fourth");
    }
}
