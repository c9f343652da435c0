//! Prints the tone chart, and optionally one interval exploration or
//! interval combination.
//!
//! Usage:
//! - `interval-tuning-table` prints the chart only;
//! - `interval-tuning-table NOTE INTERVAL DIRECTION [INTERVAL...]`,
//!   e.g. `interval-tuning-table A "Perfect Fifth" up "Major Third" "Minor Third"`;
//! - `interval-tuning-table combine [INTERVAL...]`,
//!   e.g. `interval-tuning-table combine "Major Third" "Minor Third"`.
use std::error::Error;

use interval_tuning::{
    explore::{Combination, Selection},
    report::{tone_report, RenderSettings, RendersText},
    tables,
};
use log::info;

static COMBINE: &str = "combine";

#[derive(Debug, PartialEq)]
enum Request {
    Chart,
    Explore {
        selection: Selection,
        combination: Combination,
    },
    Combine(Combination),
}
impl Request {
    fn parse(args: &[String]) -> Result<Self, Box<dyn Error>> {
        match args {
            [] => Ok(Self::Chart),
            [command, combined @ ..] if command == COMBINE => {
                Ok(Self::Combine(Combination::of_names(combined)?))
            }
            [note, interval, direction, combined @ ..] => Ok(Self::Explore {
                selection: Selection::parse(note, interval, direction)?,
                combination: Combination::of_names(combined)?,
            }),
            _ => Err(format!(
                "expected NOTE INTERVAL DIRECTION [INTERVAL...] or {COMBINE} [INTERVAL...]"
            )
            .into()),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let tables = tables::init();
    let settings = RenderSettings::default();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let request = Request::parse(&args)?;
    info!("request: {request:?}");
    match request {
        Request::Chart => (),
        Request::Explore {
            selection,
            combination,
        } => {
            println!("{}\n", selection.explore(&tables.just).render_text(&settings));
            println!("{}\n", combination.render_text(&settings));
        }
        Request::Combine(combination) => {
            println!("{}\n", combination.render_text(&settings));
        }
    }

    println!("{}", tone_report(tables)?.render_text(&settings));
    Ok(())
}
