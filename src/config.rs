//! Application-wide constants and compile-time configuration.
//!
//! Timing parameters, tone shapes and the pin map live here so they can
//! be tuned in one place.

use crate::hw::ToneBurst;

// Track

/// Number of indicator lights in the track (one bit each).
pub const TRACK_WIDTH: u32 = u8::BITS;

// Paddles

/// Activity window opened by a fresh paddle press, in decay ticks.
pub const PADDLE_TIMEOUT: u8 = 0xFF;

/// Decay tick period (µs). Matches an 8-bit timer overflowing at
/// 16 MHz / 64, so a full paddle window lasts about 261 ms.
pub const DECAY_PERIOD_US: u64 = 1024;

// Tempo

/// Linear factor from tempo knob sample to game-timer counts.
pub const TEMPO_SCALE: u32 = 2;

/// Length of one game-timer count (µs): 16 MHz / 1024 prescaler.
pub const TEMPO_COUNT_US: u64 = 64;

/// Smallest compare value accepted for the game timer.
/// 17 counts = 1088 µs, which keeps the game tick slower than decay.
pub const MIN_TEMPO_COUNTS: u32 = 16;

/// Knob midpoint for a 10-bit conversion, used when the sensor never
/// answers.
pub const DEFAULT_TEMPO_SAMPLE: u16 = 512;

/// Upper bound on the startup tempo conversion (ms).
pub const SENSOR_TIMEOUT_MS: u64 = 10;

// Session

/// Rounds played before the console decides nobody is around and
/// drops to standby.
pub const MAX_ROUNDS: u8 = 100;

// Sound & blink

/// Short chirp on a successful return.
pub const HIT_TONE: ToneBurst = ToneBurst {
    pulses: 25,
    on_ms: 1,
    off_ms: 1,
};

/// Long buzz when a round is lost.
pub const END_TONE: ToneBurst = ToneBurst {
    pulses: 255,
    on_ms: 2,
    off_ms: 1,
};

/// Half period of the winner blink (ms).
pub const BLINK_HALF_PERIOD_MS: u32 = 100;

// GPIO pin assignments (nRF52840-DK)
//
// The concrete `embassy_nrf::peripherals::*` are picked in `main.rs`.
// Adjust for your own board.
//
//   Track bit 0..3    → P0.13, P0.14, P0.15, P0.16
//   Track bit 4..7    → P0.03, P0.04, P0.28, P0.29
//   Left paddle LED   → P0.30
//   Right paddle LED  → P0.31
//   Buzzer            → P1.01
//   Left paddle btn   → P0.11 (rising edge, pull-down)
//   Right paddle btn  → P0.12 (rising edge, pull-down)
//   Tempo knob        → AIN0 / P0.02
