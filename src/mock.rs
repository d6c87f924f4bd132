//! Recording collaborators for host tests.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use heapless::Vec;

use crate::hw::{Display, TempoSensor, Tone, ToneBurst};
use crate::track::Side;
use crate::Error;

fn slot(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

#[derive(Default)]
pub struct MockDisplay {
    pub pattern: u8,
    pub renders: u32,
    pub indicators: [bool; 2],
    pub indicator_on_calls: [u32; 2],
    pub indicator_off_calls: [u32; 2],
}

impl MockDisplay {
    pub fn indicator(&self, side: Side) -> bool {
        self.indicators[slot(side)]
    }

    pub fn off_calls(&self, side: Side) -> u32 {
        self.indicator_off_calls[slot(side)]
    }

    pub fn on_calls(&self, side: Side) -> u32 {
        self.indicator_on_calls[slot(side)]
    }
}

impl Display for MockDisplay {
    fn render(&mut self, pattern: u8) {
        self.pattern = pattern;
        self.renders += 1;
    }

    fn set_indicator(&mut self, side: Side, on: bool) {
        self.indicators[slot(side)] = on;
        if on {
            self.indicator_on_calls[slot(side)] += 1;
        } else {
            self.indicator_off_calls[slot(side)] += 1;
        }
    }
}

#[derive(Default)]
pub struct MockTone {
    pub bursts: Vec<ToneBurst, 16>,
}

impl Tone for MockTone {
    fn burst(&mut self, tone: ToneBurst) {
        let _ = self.bursts.push(tone);
    }
}

pub struct MockSensor(pub Result<u16, Error>);

impl TempoSensor for MockSensor {
    fn sample(&mut self) -> Result<u16, Error> {
        self.0
    }
}

/// Output pin that remembers its level and counts rising edges.
#[derive(Default)]
pub struct MockPin {
    pub high: bool,
    pub rising_edges: u32,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.high {
            self.rising_edges += 1;
        }
        self.high = true;
        Ok(())
    }
}

/// Delay that only adds up the requested time.
#[derive(Default)]
pub struct MockDelay {
    pub elapsed_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}
