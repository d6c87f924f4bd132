//! Ball track: position, direction of travel and the two paddle sides.
//!
//! Layout (8 bits, one light per bit):
//! ```text
//!  Left paddle                               Right paddle
//!      |  b7  b6  b5  b4  b3  b2  b1  b0  |
//!      <---------- RightToLeft -----------
//!      ----------- LeftToRight ---------->
//! ```
//! Shifting past b7 or b0 leaves the all-zero exit sentinel.

/// One of the two paddles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other paddle.
    pub const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Direction the ball is travelling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward bit 0 and the right paddle.
    LeftToRight,
    /// Toward bit 7 and the left paddle.
    #[default]
    RightToLeft,
}

impl Direction {
    /// Reverse direction.
    pub const fn flip(self) -> Self {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
        }
    }

    /// Paddle guarding the edge the ball is heading for.
    pub const fn exit_side(self) -> Side {
        match self {
            Direction::LeftToRight => Side::Right,
            Direction::RightToLeft => Side::Left,
        }
    }
}

/// Ball marker: exactly one bit set, or zero once it has left the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BallPosition(u8);

impl BallPosition {
    /// Sentinel for "ball left the track this tick".
    pub const EXITED: Self = Self(0);

    /// Bit the ball starts from when travelling in `direction`.
    ///
    /// This is the end of the track the ball moves away from, i.e. the
    /// end next to the paddle that serves or returns it.
    pub const fn entry(direction: Direction) -> Self {
        match direction {
            Direction::RightToLeft => Self(0x01),
            Direction::LeftToRight => Self(0x80),
        }
    }

    /// Shift one step toward `direction`'s exit edge.
    pub const fn advance(self, direction: Direction) -> Self {
        match direction {
            Direction::RightToLeft => Self(self.0 << 1),
            Direction::LeftToRight => Self(self.0 >> 1),
        }
    }

    pub const fn has_exited(self) -> bool {
        self.0 == 0
    }

    /// Raw pattern for the display.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Bit index of the ball, `None` once exited.
    pub const fn index(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros())
        }
    }
}

impl Default for BallPosition {
    fn default() -> Self {
        Self::entry(Direction::default())
    }
}
