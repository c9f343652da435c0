//! Pitch arithmetic for equal temperament and five-limit just intonation.
//!
//! Intervals are exact ratios, notes are a reference frequency plus a chain of
//! directed shifts. Two fixed tone tables (just and equal) are built once per
//! process and looked up by name.
//!
//! ```
//! # use interval_tuning::{tables, primitives::PERFECT_FIFTH};
//! let a4 = tables::get().just.lookup("A4").unwrap();
//! assert_eq!(a4.up(PERFECT_FIFTH).frequency(), 660.0);
//! ```

pub mod explore;
pub mod primitives;
pub mod report;
pub mod tables;

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum IntonationError {
    #[error("Unknown interval: `{0}`")]
    UnknownInterval(String),
    #[error("Unknown tone: `{0}`")]
    UnknownTone(String),
    #[error("Unknown pitch class: `{0}`")]
    UnknownPitchClass(String),
    #[error("Invalid direction: `{0}`. Expected `up` or `down`")]
    InvalidDirection(String),
}
pub type IntonationResult<T> = Result<T, IntonationError>;
