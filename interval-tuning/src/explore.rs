//! Stepping through pitch classes and finding where the step lands in the
//! just tones table.
use log::debug;

use crate::{
    primitives::{Direction, Interval, IntervalClass, Note, PitchClass},
    tables::{JustTones, ToneName},
    IntonationResult,
};

/// Pitch class, interval and direction, as chosen by user.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Selection {
    pub pitch_class: PitchClass,
    pub interval: Interval,
    pub direction: Direction,
}
impl Selection {
    pub fn new(
        pitch_class: PitchClass,
        interval: Interval,
        direction: Direction,
    ) -> Self {
        Self {
            pitch_class,
            interval,
            direction,
        }
    }

    /// Validate raw labels. Nothing is computed until all three are known.
    ///
    /// # Example
    /// ```
    /// # use interval_tuning::explore::Selection;
    /// # use interval_tuning::primitives::PitchClass;
    /// let selection = Selection::parse("A", "Perfect Fifth", "up").unwrap();
    /// assert_eq!(selection.resulting_pitch_class(), PitchClass::E);
    /// assert!(Selection::parse("A", "Perfect Fifth", "left").is_err());
    /// ```
    pub fn parse(
        pitch_class: &str,
        interval: &str,
        direction: &str,
    ) -> IntonationResult<Self> {
        Ok(Self::new(
            pitch_class.parse()?,
            interval.parse()?,
            direction.parse()?,
        ))
    }

    pub fn resulting_pitch_class(&self) -> PitchClass {
        self.pitch_class.shift(self.interval, self.direction)
    }

    /// Every table tone of the selected pitch class, moved by interval.
    pub fn explore(&self, tones: &JustTones) -> Exploration {
        let result = self.resulting_pitch_class();
        debug!(
            "{} {} {} → {}",
            self.pitch_class,
            self.direction,
            self.interval.name(),
            result
        );
        let matches = tones
            .iter()
            .filter(|(name, _)| PitchClass::of_tone(name) == Ok(self.pitch_class))
            .filter_map(|(root_name, root)| {
                let moved = root.directed(self.interval, self.direction);
                let (nearest_name, nearest) = tones.nearest(moved.frequency())?;
                Some(JustMatch {
                    root_name,
                    root: root.clone(),
                    result_name: result,
                    result: moved,
                    nearest_name,
                    nearest: nearest.clone(),
                })
            })
            .collect();
        Exploration {
            selection: *self,
            result,
            matches,
        }
    }
}

/// One table tone of the selected class, and where the interval moves it.
#[derive(Debug, PartialEq, Clone)]
pub struct JustMatch {
    pub root_name: ToneName,
    pub root: Note,
    pub result_name: PitchClass,
    pub result: Note,
    pub nearest_name: ToneName,
    pub nearest: Note,
}
impl JustMatch {
    pub fn root_hz(&self) -> f64 {
        self.root.frequency()
    }
    pub fn result_hz(&self) -> f64 {
        self.result.frequency()
    }
    pub fn nearest_hz(&self) -> f64 {
        self.nearest.frequency()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Exploration {
    pub selection: Selection,
    pub result: PitchClass,
    pub matches: Vec<JustMatch>,
}

/// Sum of interval sizes, reduced to one interval.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Combination {
    /// Already reduced modulo octave.
    pub semitones: u8,
    pub interval: IntervalClass,
}
impl Combination {
    /// Combine intervals. Empty input is Unison.
    ///
    /// # Example
    /// ```
    /// # use interval_tuning::explore::Combination;
    /// # use interval_tuning::primitives::{MAJOR_THIRD, MINOR_THIRD};
    /// let combined = Combination::of_intervals([MAJOR_THIRD, MINOR_THIRD]).unwrap();
    /// assert_eq!(combined.semitones, 7);
    /// assert_eq!(combined.interval.name(), "Perfect Fifth");
    /// ```
    pub fn of_intervals(
        intervals: impl IntoIterator<Item = Interval>,
    ) -> IntonationResult<Self> {
        let total = intervals
            .into_iter()
            .map(|interval| interval.semitones() as i64)
            .sum::<i64>();
        let interval = Interval::from_semitones(total)?;
        debug!("combined {total} semitones into {}", interval.name());
        Ok(Self {
            semitones: interval.semitones(),
            interval,
        })
    }

    /// Combine intervals, given by names or labels. Repeats are allowed.
    pub fn of_names<S: AsRef<str>>(
        names: impl IntoIterator<Item = S>,
    ) -> IntonationResult<Self> {
        let intervals = names
            .into_iter()
            .map(|name| name.as_ref().parse::<Interval>())
            .collect::<IntonationResult<Vec<_>>>()?;
        Self::of_intervals(intervals)
    }
}
