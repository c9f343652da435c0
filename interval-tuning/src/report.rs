//! Plain-text rendering of tables and explorations.
use log::debug;

use crate::{
    explore::{Combination, Exploration, JustMatch},
    tables::{ToneName, ToneTables},
    IntonationResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// How the reference pitch is written in ratio expressions.
    pub reference_label: String,
    /// Decimal places of Hz values.
    pub precision: usize,
}
impl RenderSettings {
    pub fn new(reference_label: impl Into<String>, precision: usize) -> Self {
        Self {
            reference_label: reference_label.into(),
            precision,
        }
    }
    fn hz(&self, hz: f64) -> String {
        format!("{:.*}", self.precision, hz)
    }
}
impl Default for RenderSettings {
    fn default() -> Self {
        Self::new("A440", 4)
    }
}

pub trait RendersText {
    fn render_text(&self, settings: &RenderSettings) -> String;
}

/// One line of the tone chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneRow {
    pub tone: ToneName,
    /// Cumulative ratio from the reference, like `9/4`.
    pub ratio: String,
    pub just_hz: f64,
    pub equal_hz: f64,
    pub derivation: String,
}

/// Every just tone with its equal tempered counterpart.
pub fn tone_report(tables: &ToneTables) -> IntonationResult<Vec<ToneRow>> {
    let rows = tables
        .just
        .iter()
        .map(|(tone, note)| -> IntonationResult<ToneRow> {
            Ok(ToneRow {
                tone,
                ratio: note.cumulative_ratio().to_string(),
                just_hz: note.frequency(),
                equal_hz: tables.equal.frequency(tone)?,
                derivation: note.derivation(),
            })
        })
        .collect::<IntonationResult<Vec<_>>>()?;
    debug!("tone report: {} rows", rows.len());
    Ok(rows)
}

impl RendersText for ToneRow {
    fn render_text(&self, settings: &RenderSettings) -> String {
        format!(
            "{} | {} * {} | {} | {} | {}",
            self.tone,
            settings.reference_label,
            self.ratio,
            settings.hz(self.just_hz),
            settings.hz(self.equal_hz),
            self.derivation
        )
    }
}

impl RendersText for Vec<ToneRow> {
    fn render_text(&self, settings: &RenderSettings) -> String {
        let header = "tone | hz_frac | just hz | equal hz | derivation".to_string();
        std::iter::once(header)
            .chain(self.iter().map(|row| row.render_text(settings)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl RendersText for JustMatch {
    fn render_text(&self, settings: &RenderSettings) -> String {
        format!(
            "Root: {} {} Result: {} {} Nearest: {} {}",
            self.root_name,
            settings.hz(self.root_hz()),
            self.result_name,
            settings.hz(self.result_hz()),
            self.nearest_name,
            settings.hz(self.nearest_hz())
        )
    }
}

impl RendersText for Exploration {
    fn render_text(&self, settings: &RenderSettings) -> String {
        let mut lines = vec![
            format!("First Note: {}", self.selection.pitch_class),
            format!(
                "Interval: {} Direction: {}",
                self.selection.interval, self.selection.direction
            ),
            format!("Second Note: {}", self.result),
            "Nearest Just Tones:".to_string(),
        ];
        lines.extend(
            self.matches
                .iter()
                .map(|found| format!("  * {}", found.render_text(settings))),
        );
        lines.join("\n")
    }
}

impl RendersText for Combination {
    fn render_text(&self, _settings: &RenderSettings) -> String {
        format!("Semitones: {}\nInterval: {}", self.semitones, self.interval)
    }
}
