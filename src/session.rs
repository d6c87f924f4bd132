//! Round counter deciding between "blink and wait" and standby.

use crate::config::MAX_ROUNDS;
use crate::log::warn;

/// Tag stored next to the count so garbage RAM after power-on is not
/// mistaken for a real count.
const RETAINED_MAGIC: u32 = 0x4C50_0000;
const RETAINED_MAGIC_MASK: u32 = 0xFFFF_0000;

/// What the console does after a lost round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionOutcome {
    /// Show the winner and wait for a reset.
    Continue,
    /// Round limit passed; players are likely away.
    EnterIdle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionCounter {
    rounds: u8,
}

impl SessionCounter {
    pub const fn new() -> Self {
        Self { rounds: 0 }
    }

    pub const fn rounds(&self) -> u8 {
        self.rounds
    }

    /// Count a finished round.
    pub fn record_round_end(&mut self) -> SessionOutcome {
        self.rounds = self.rounds.saturating_add(1);
        if self.rounds > MAX_ROUNDS {
            self.rounds = 0;
            SessionOutcome::EnterIdle
        } else {
            SessionOutcome::Continue
        }
    }

    /// Pack the count for a RAM word that survives warm resets.
    pub const fn to_retained(&self) -> u32 {
        RETAINED_MAGIC | self.rounds as u32
    }

    /// Restore from a retained word; anything untagged or out of range
    /// reads as a fresh counter.
    pub fn from_retained(word: u32) -> Self {
        if word & RETAINED_MAGIC_MASK != RETAINED_MAGIC {
            return Self::new();
        }
        match u8::try_from(word & !RETAINED_MAGIC_MASK) {
            Ok(rounds) if rounds <= MAX_ROUNDS => Self { rounds },
            _ => {
                warn!("Retained word {=u32:#x} out of range, counting from zero", word);
                Self::new()
            }
        }
    }
}
