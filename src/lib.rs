//! Game logic for ledpong.
//!
//! Everything that decides what the console does lives here and is
//! `no_std`; the embedded binary (`main.rs`, feature `embedded`) only
//! binds these types to GPIO, GPIOTE, SAADC and the Embassy timers.
//!
//! Usage: `cargo test` runs the whole suite on the host.
//!
//! Four event sources feed the logic:
//!   - left / right paddle press edges → [`PaddleTracker::on_press_edge`]
//!   - paddle decay tick               → [`PaddleTracker::decay`]
//!   - game tick                       → [`Game::tick`]

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod game;
pub mod hw;
pub mod paddle;
pub mod session;
pub mod tempo;
pub mod track;

mod log;
#[cfg(test)]
mod mock;

pub use error::Error;
pub use game::{Game, Phase, RoundEnd, Tick};
pub use paddle::{PaddleTracker, Press};
pub use session::{SessionCounter, SessionOutcome};
pub use tempo::{derive_period, TempoPeriod};
pub use track::{BallPosition, Direction, Side};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
