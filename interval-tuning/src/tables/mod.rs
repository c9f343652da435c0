//! Process-wide tone tables.
//!
//! Both tables are built once by [init] and only read afterwards. [get] is the
//! single accessor, so initialization order is explicit at the call site,
//! while tests may still build tables on their own.

use log::debug;
use once_cell::sync::OnceCell;

use crate::primitives::{Note, Ratio};

pub mod equal;
pub mod just;

pub use equal::{equal_frequency, EqualTones};
pub use just::JustTones;

/// Tone names are fixed literals, like `A4` or `C♯4/D♭5`.
pub type ToneName = &'static str;

pub static REFERENCE_NAME: &str = "A4";
pub static REFERENCE_HZ: u64 = 440;

/// A4 = 440 Hz, without shifts.
pub fn reference_note() -> Note {
    Note::new(REFERENCE_NAME, Ratio::new(REFERENCE_HZ, 1u64))
}

#[derive(Debug)]
pub struct ToneTables {
    pub just: JustTones,
    pub equal: EqualTones,
}
impl ToneTables {
    pub fn build() -> Self {
        Self {
            just: JustTones::build(),
            equal: EqualTones::build(),
        }
    }
}

static TABLES: OnceCell<ToneTables> = OnceCell::new();

/// Build tables, if not built yet.
pub fn init() -> &'static ToneTables {
    TABLES.get_or_init(|| {
        debug!("initializing tone tables");
        ToneTables::build()
    })
}

/// Tables, built by [init]. Calls it on the first access.
pub fn get() -> &'static ToneTables {
    match TABLES.get() {
        Some(tables) => tables,
        None => init(),
    }
}
