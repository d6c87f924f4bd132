//! Game state machine, driven once per game tick.
//!
//! ```text
//!            miss, count <= MAX          miss, count > MAX
//!  RoundOver <----------------- InPlay -----------------> Standby
//!  (blink until reset)          ^  | hit                    |
//!                               |  v                        |
//!                               +--+        wake()          |
//!                               ^---------------------------+
//! ```
//!
//! Ball, direction and phase are written only from the tick context.
//! Paddle activity is read from the shared [`PaddleTracker`].


use crate::config::{END_TONE, HIT_TONE};
use crate::hw::{Display, Tone};
use crate::log::info;
use crate::paddle::PaddleTracker;
use crate::session::{SessionCounter, SessionOutcome};
use crate::track::{BallPosition, Direction, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Ball is moving; ticks are processed.
    InPlay,
    /// Round lost; winner indicator blinks until an external reset.
    RoundOver,
    /// Round limit passed; asleep until any input event.
    Standby,
}

/// How a lost round is wrapped up by the runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundEnd {
    /// Blink this side's indicator forever.
    Blink(Side),
    /// Enter low power, then call [`Game::wake`].
    Standby,
}

/// Result of one game tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Ball moved one step.
    Advanced,
    /// Ball returned by this side's paddle.
    Hit(Side),
    /// Ball missed; the round is over.
    RoundOver(RoundEnd),
    /// Not in play; tick ignored.
    Halted,
}

pub struct Game {
    ball: BallPosition,
    direction: Direction,
    phase: Phase,
    session: SessionCounter,
}

impl Game {
    pub fn new(session: SessionCounter) -> Self {
        Self {
            ball: BallPosition::default(),
            direction: Direction::default(),
            phase: Phase::InPlay,
            session,
        }
    }

    /// Show the served ball before the first tick.
    pub fn start(&self, display: &mut impl Display) {
        display.render(self.ball.bits());
    }

    pub fn ball(&self) -> BallPosition {
        self.ball
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> SessionCounter {
        self.session
    }

    pub fn rounds(&self) -> u8 {
        self.session.rounds()
    }

    /// Advance the ball and settle the edge, if reached.
    pub fn tick(
        &mut self,
        paddles: &PaddleTracker,
        display: &mut impl Display,
        tone: &mut impl Tone,
    ) -> Tick {
        if self.phase != Phase::InPlay {
            return Tick::Halted;
        }

        self.ball = self.ball.advance(self.direction);
        if !self.ball.has_exited() {
            display.render(self.ball.bits());
            return Tick::Advanced;
        }

        let side = self.direction.exit_side();
        if paddles.is_active(side) {
            self.hit(side, tone);
            display.render(self.ball.bits());
            Tick::Hit(side)
        } else {
            Tick::RoundOver(self.end_round(side, paddles, display, tone))
        }
    }

    /// Return the ball: it re-enters on the bit next to `side`'s paddle.
    fn hit(&mut self, side: Side, tone: &mut impl Tone) {
        tone.burst(HIT_TONE);
        self.direction = self.direction.flip();
        self.ball = BallPosition::entry(self.direction);
        info!("Hit by {} paddle", side);
    }

    fn end_round(
        &mut self,
        exit_side: Side,
        paddles: &PaddleTracker,
        display: &mut impl Display,
        tone: &mut impl Tone,
    ) -> RoundEnd {
        paddles.suspend();
        // The exit sentinel renders as an empty track.
        display.render(self.ball.bits());
        tone.burst(END_TONE);

        match self.session.record_round_end() {
            SessionOutcome::EnterIdle => {
                info!("Round lost on {}; round limit passed, standby", exit_side);
                self.phase = Phase::Standby;
                RoundEnd::Standby
            }
            SessionOutcome::Continue => {
                let winner = exit_side.opposite();
                info!(
                    "Round lost on {}; {} rounds played, {} wins",
                    exit_side,
                    self.session.rounds(),
                    winner
                );
                self.phase = Phase::RoundOver;
                RoundEnd::Blink(winner)
            }
        }
    }

    /// Wake from standby: fresh serve, paddles accepted again.
    ///
    /// Returns `false` in any other phase; the blink state is only left
    /// through a reset.
    pub fn wake(&mut self, paddles: &PaddleTracker, display: &mut impl Display) -> bool {
        if self.phase != Phase::Standby {
            return false;
        }

        self.ball = BallPosition::default();
        self.direction = Direction::default();
        self.phase = Phase::InPlay;
        paddles.resume(display);
        display.render(self.ball.bits());
        info!("Woke from standby, new serve");
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(SessionCounter::new())
    }
}
