//! Unified error type for ledpong.
//!
//! We avoid `alloc` - variants carry only fixed-size data.
//! Implements `defmt::Format` for on-target logging when the `defmt`
//! feature is enabled.

/// Top-level error type used across the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The tempo sensor did not finish a conversion in time.
    SensorTimeout,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::SensorTimeout => f.write_str("tempo sensor timed out"),
        }
    }
}
