//! Signal-path selection for a player's button and lamp.
//!
//! The original hand-wired boxes selected the path with a pair of booleans,
//! which could also express the nonsensical "analog and shield at once".
//! Here the choice is an enum per line, fixed at construction: the invalid
//! combination is simply unrepresentable, and dispatch happens on the
//! variant instead of flag tests.

use core::convert::Infallible;
use core::fmt::Debug;

use embedded_hal::digital::{InputPin, OutputPin};

use crate::shield::Channel;

/// Blocking analog read of a native pin.
///
/// embedded-hal v1.0 has no blocking ADC trait, so the driver defines the
/// seam it needs: a single read returning the platform's raw reading
/// (0–1023 on the target board). Adapting a HAL ADC pin is a one-line impl.
pub trait AnalogInput {
    /// Error type for analog reads.
    type Error: Debug;

    /// Sample the pin once.
    fn read(&mut self) -> Result<u16, Self::Error>;
}

/// Which physical path backs a player's button.
pub enum ButtonRouting<BTN, ADC> {
    /// Native digital pin; pressed when high.
    Digital(BTN),
    /// Native analog pin with threshold detection; see
    /// [`ANALOG_PRESS_THRESHOLD`](crate::player::ANALOG_PRESS_THRESHOLD).
    Analog(ADC),
    /// Shield expander channel; pressed when the channel reads high.
    Shield(Channel),
}

/// Which physical path backs a player's indicator lamp.
pub enum LampRouting<LAMP> {
    /// Native digital pin.
    Digital(LAMP),
    /// Shield expander channel.
    Shield(Channel),
}

/// Filler for the `ADC` parameter of players whose button is not
/// analog-routed.
///
/// Never read by the driver; the stub reading of 0 sits well below the
/// press threshold should anyone construct a `ButtonRouting::Analog` with
/// it anyway.
pub struct NoAnalog;

impl AnalogInput for NoAnalog {
    type Error = Infallible;

    fn read(&mut self) -> Result<u16, Self::Error> {
        Ok(0)
    }
}

impl<BTN: InputPin, ADC: AnalogInput> ButtonRouting<BTN, ADC> {
    /// The shield channel, if this button is shield-routed.
    pub fn shield_channel(&self) -> Option<Channel> {
        match self {
            ButtonRouting::Shield(channel) => Some(*channel),
            _ => None,
        }
    }
}

impl<LAMP: OutputPin> LampRouting<LAMP> {
    /// The shield channel, if this lamp is shield-routed.
    pub fn shield_channel(&self) -> Option<Channel> {
        match self {
            LampRouting::Shield(channel) => Some(*channel),
            _ => None,
        }
    }
}
