//! Shield GPIO expander abstraction
//!
//! The quiz box's audio/storage shield exposes an 8-channel GPIO expander
//! that is multiplexed across all players. [`ShieldGpio`] is the capability
//! the driver needs from it: set a channel's direction, write a level, read
//! a level. The SPI bus, audio playback, and SD storage that live on the
//! same physical board are someone else's concern and are not modeled here.
//!
//! The expander is stateful and shared: another player may have repurposed a
//! neighbouring channel (or this one) between any two accesses, so the
//! driver re-asserts direction immediately before every shield read/write
//! rather than trusting the direction set at construction to persist.

use core::fmt::Debug;

use crate::error::InvalidChannel;

/// Number of GPIO channels on the shield expander.
pub const SHIELD_CHANNEL_COUNT: u8 = 8;

/// Direction of a shield GPIO channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinMode {
    /// Read-capable line (button).
    Input,
    /// Write-capable line (lamp).
    Output,
}

/// Logic level of a digital line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// A validated shield expander channel (0–7).
///
/// Channel numbers outside the expander's range are rejected at
/// construction, so the per-call paths never have to re-check them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel(u8);

impl Channel {
    /// Create a channel, rejecting indices outside `0..SHIELD_CHANNEL_COUNT`.
    pub const fn new(index: u8) -> Result<Self, InvalidChannel> {
        if index < SHIELD_CHANNEL_COUNT {
            Ok(Self(index))
        } else {
            Err(InvalidChannel(index))
        }
    }

    /// The raw expander channel index.
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Capability trait for the shared shield GPIO expander.
///
/// Implement this for whatever drives the physical expander (typically a
/// thin adapter over the shield vendor's GPIO calls). The simulated backend
/// in [`crate::sim`] implements it for host-side tests.
pub trait ShieldGpio {
    /// Error type for expander operations.
    type Error: Debug;

    /// Set a channel's direction.
    fn pin_mode(&mut self, channel: Channel, mode: PinMode) -> Result<(), Self::Error>;

    /// Drive an output channel to a level.
    fn digital_write(&mut self, channel: Channel, level: Level) -> Result<(), Self::Error>;

    /// Read the current level of a channel.
    fn digital_read(&mut self, channel: Channel) -> Result<Level, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_accepts_expander_range() {
        for index in 0..SHIELD_CHANNEL_COUNT {
            assert_eq!(Channel::new(index).unwrap().index(), index);
        }
    }

    #[test]
    fn channel_rejects_out_of_range() {
        assert_eq!(Channel::new(8), Err(InvalidChannel(8)));
        assert_eq!(Channel::new(255), Err(InvalidChannel(255)));
    }
}
