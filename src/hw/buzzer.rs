//! Piezo buzzer toggled from a GPIO pin.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::hw::{Tone, ToneBurst};

pub struct PinBuzzer<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> PinBuzzer<P, D> {
    pub fn new(mut pin: P, delay: D) -> Self {
        let _ = pin.set_low();
        Self { pin, delay }
    }

    /// Give the pin and delay back.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P: OutputPin, D: DelayNs> Tone for PinBuzzer<P, D> {
    fn burst(&mut self, tone: ToneBurst) {
        for _ in 0..tone.pulses {
            let _ = self.pin.set_high();
            self.delay.delay_ms(tone.on_ms);
            let _ = self.pin.set_low();
            self.delay.delay_ms(tone.off_ms);
        }
    }
}
