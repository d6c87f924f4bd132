//! Peripheral capabilities the game drives.
//!
//! The state machine only sees these traits. Concrete adapters over
//! `embedded-hal` pins live in the submodules:
//!
//! - **LED board**: eight track lights + two paddle indicators
//! - **Buzzer**: bit-banged tone bursts with a blocking delay

pub mod buzzer;
pub mod led_board;

pub use buzzer::PinBuzzer;
pub use led_board::{blink, LedBoard};

use crate::track::Side;
use crate::Error;

/// Track lights plus the two paddle indicators.
pub trait Display {
    /// Show an 8-bit pattern on the track (bit 0 = rightmost light).
    fn render(&mut self, pattern: u8);

    fn set_indicator(&mut self, side: Side, on: bool);
}

/// Shape of a square-wave tone burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneBurst {
    pub pulses: u16,
    pub on_ms: u32,
    pub off_ms: u32,
}

impl ToneBurst {
    /// Total duration of the burst (ms).
    pub const fn duration_ms(&self) -> u32 {
        self.pulses as u32 * (self.on_ms + self.off_ms)
    }
}

/// Buzzer. `burst` blocks until the last pulse has finished.
pub trait Tone {
    fn burst(&mut self, tone: ToneBurst);
}

/// Tempo knob. One blocking conversion per call.
pub trait TempoSensor {
    fn sample(&mut self) -> Result<u16, Error>;
}
