//! GPIO LED board: eight track lights and two paddle indicators.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::BLINK_HALF_PERIOD_MS;
use crate::hw::Display;
use crate::track::Side;

/// LED board driven directly from output pins (active-high).
pub struct LedBoard<P> {
    /// Track pins, index = bit number.
    track: [P; 8],
    left: P,
    right: P,
}

impl<P: OutputPin> LedBoard<P> {
    /// Take ownership of the pins and switch every light off.
    pub fn new(track: [P; 8], left: P, right: P) -> Self {
        let mut board = Self { track, left, right };
        board.render(0);
        board.set_indicator(Side::Left, false);
        board.set_indicator(Side::Right, false);
        board
    }

    /// Give the pins back.
    pub fn release(self) -> ([P; 8], P, P) {
        (self.track, self.left, self.right)
    }
}

impl<P: OutputPin> Display for LedBoard<P> {
    fn render(&mut self, pattern: u8) {
        for (bit, pin) in self.track.iter_mut().enumerate() {
            let _ = if pattern & (1 << bit) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
        }
    }

    fn set_indicator(&mut self, side: Side, on: bool) {
        let pin = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        let _ = if on { pin.set_high() } else { pin.set_low() };
    }
}

/// One full on/off cycle of `side`'s indicator.
pub fn blink(display: &mut impl Display, delay: &mut impl DelayNs, side: Side) {
    display.set_indicator(side, true);
    delay.delay_ms(BLINK_HALF_PERIOD_MS);
    display.set_indicator(side, false);
    delay.delay_ms(BLINK_HALF_PERIOD_MS);
}
