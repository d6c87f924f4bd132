//! Paddle activity tracking.
//!
//! Each side owns a countdown. A press edge opens a window of
//! `PADDLE_TIMEOUT` decay ticks; the decay tick closes it one step at a
//! time. The game tick only ever reads the counters.
//!
//! Writers per counter:
//!   - press handler: 0 → `PADDLE_TIMEOUT`, by compare-and-swap only
//!   - decay handler: n → n - 1 for n > 0
//!
//! Neither write can move a counter across zero in the wrong direction,
//! so no interleaving revives a closed side or wraps below zero.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::config::PADDLE_TIMEOUT;
use crate::hw::Display;
use crate::log::debug;
use crate::track::Side;

/// Result of a press edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    /// Side was idle; a fresh window is now open.
    Opened,
    /// Side was already open; window left unchanged.
    AlreadyOpen,
    /// Tracker is suspended (round over or standby).
    Suspended,
}

/// Per-side activity counters shared between event handlers.
pub struct PaddleTracker {
    left: AtomicU8,
    right: AtomicU8,
    suspended: AtomicBool,
}

impl PaddleTracker {
    pub const fn new() -> Self {
        Self {
            left: AtomicU8::new(0),
            right: AtomicU8::new(0),
            suspended: AtomicBool::new(false),
        }
    }

    fn counter(&self, side: Side) -> &AtomicU8 {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Rising edge on `side`'s button.
    pub fn on_press_edge(&self, side: Side, display: &mut impl Display) -> Press {
        if self.is_suspended() {
            return Press::Suspended;
        }

        match self.counter(side).compare_exchange(
            0,
            PADDLE_TIMEOUT,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                display.set_indicator(side, true);
                debug!("Paddle {}: window opened", side);
                Press::Opened
            }
            Err(_) => Press::AlreadyOpen,
        }
    }

    /// Periodic decay tick. Must run faster than the game tick.
    pub fn decay(&self, display: &mut impl Display) {
        if self.is_suspended() {
            return;
        }

        for side in [Side::Left, Side::Right] {
            let previous = self.counter(side).fetch_update(
                Ordering::AcqRel,
                Ordering::Acquire,
                |n| n.checked_sub(1),
            );
            if previous == Ok(1) {
                display.set_indicator(side, false);
            }
        }
    }

    pub fn is_active(&self, side: Side) -> bool {
        self.level(side) > 0
    }

    /// Remaining decay ticks in `side`'s window.
    pub fn level(&self, side: Side) -> u8 {
        self.counter(side).load(Ordering::Acquire)
    }

    /// Stop opening windows and freeze decay.
    pub fn suspend(&self) {
        self.suspended.store(true, Ordering::Release);
    }

    /// Close both windows and start accepting presses again.
    ///
    /// Counters are only written here while suspended, when neither the
    /// press nor the decay handler touches them.
    pub fn resume(&self, display: &mut impl Display) {
        for side in [Side::Left, Side::Right] {
            self.counter(side).store(0, Ordering::Release);
            display.set_indicator(side, false);
        }
        self.suspended.store(false, Ordering::Release);
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::Acquire)
    }
}

impl Default for PaddleTracker {
    fn default() -> Self {
        Self::new()
    }
}
