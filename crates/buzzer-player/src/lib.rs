//! Per-player input/output driver for a multi-player quiz buzzer box.
//!
//! Each physical player has a buzzer button and an indicator lamp. Depending
//! on how the box was assembled, either line may be wired to a native
//! microcontroller pin (digital, or analog with a threshold) or to one of the
//! eight GPIO channels exposed by the audio/storage shield's expander. This
//! crate hides that choice behind [`BuzzerPlayer`]: the polling loop that
//! owns the shield just asks "is this player pressed?" and "light this
//! player up" without knowing which signal path answers.
//!
//! The shield expander is shared across every player, so it is never owned
//! here; callers pass it (as [`ShieldGpio`]) into each operation. Native pins
//! are owned, as usual for embedded-hal drivers.
//!
//! ## Example
//!
//! ```rust,ignore
//! use buzzer_player::{BuzzerPlayer, ButtonRouting, Channel, LampRouting, NoAnalog};
//!
//! // Player 1: button on shield channel 2, lamp on a native pin.
//! let mut player = BuzzerPlayer::<_, NoAnalog, _>::new(
//!     &mut shield,
//!     ButtonRouting::Shield(Channel::new(2)?),
//!     LampRouting::Digital(lamp_pin),
//! )?;
//!
//! loop {
//!     if player.check_pressed(&mut shield)? {
//!         player.flash(&mut shield, &mut delay)?;
//!         break;
//!     }
//! }
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

pub mod error;
pub mod player;
pub mod routing;
pub mod shield;

#[cfg(any(test, feature = "std"))]
pub mod sim;

pub use error::{Error, InvalidChannel};
pub use player::{
    BuzzerPlayer, ANALOG_PRESS_THRESHOLD, FLASH_INTERVAL_MS, FLASH_TOGGLE_COUNT,
};
pub use routing::{AnalogInput, ButtonRouting, LampRouting, NoAnalog};
pub use shield::{Channel, Level, PinMode, ShieldGpio, SHIELD_CHANNEL_COUNT};
