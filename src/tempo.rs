//! Tempo knob → game tick period.

use crate::config::{MIN_TEMPO_COUNTS, TEMPO_COUNT_US, TEMPO_SCALE};
use crate::hw::TempoSensor;
use crate::log::info;
use crate::Error;

/// Game tick interval, in game-timer counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TempoPeriod(u32);

impl TempoPeriod {
    /// Linear map from a raw knob sample.
    ///
    /// Clamped from below so the game tick never outruns paddle decay.
    pub fn from_sample(sample: u16) -> Self {
        Self((u32::from(sample) * TEMPO_SCALE).max(MIN_TEMPO_COUNTS))
    }

    /// Compare value loaded into the game timer.
    pub const fn counts(self) -> u32 {
        self.0
    }

    /// Tick interval in microseconds (compare-match fires every
    /// `counts + 1` timer counts).
    pub const fn as_micros(self) -> u64 {
        (self.0 as u64 + 1) * TEMPO_COUNT_US
    }
}

/// Sample the tempo sensor once and derive the game tick period.
pub fn derive_period(sensor: &mut impl TempoSensor) -> Result<TempoPeriod, Error> {
    let sample = sensor.sample()?;
    let period = TempoPeriod::from_sample(sample);
    info!(
        "Tempo: sample={} counts={} period={}us",
        sample,
        period.counts(),
        period.as_micros()
    );
    Ok(period)
}
