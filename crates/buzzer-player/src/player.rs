//! Core player operations
//!
//! [`BuzzerPlayer`] is constructed once per physical player and then driven
//! by the external polling loop that owns the shared shield: poll
//! [`check_pressed`](BuzzerPlayer::check_pressed), and on a win run
//! [`flash`](BuzzerPlayer::flash), with [`turn_on`](BuzzerPlayer::turn_on) /
//! [`stop_flash`](BuzzerPlayer::stop_flash) for round resets.
//!
//! Everything here is stateless per call: the routings are fixed at
//! construction and every read/write goes to the live backend, never a
//! cached level.

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::debug;

use crate::error::Error;
use crate::routing::{AnalogInput, ButtonRouting, LampRouting};
use crate::shield::{Level, PinMode, ShieldGpio};

/// Raw analog reading at or above which an analog-routed button counts as
/// pressed, on the platform's 0–1023 range.
///
/// The button line must carry a pull-down resistor: unpressed it then reads
/// far below this value, and supply noise never crosses it. The constant is
/// deliberately not configurable; correctness is coupled to the resistor
/// fitted at assembly time.
pub const ANALOG_PRESS_THRESHOLD: u16 = 900;

/// Number of lamp toggles in the win-flash sequence.
pub const FLASH_TOGGLE_COUNT: u32 = 25;

/// Delay between flash toggles, in milliseconds.
pub const FLASH_INTERVAL_MS: u32 = 200;

/// One player's button and indicator lamp, each behind a fixed routing.
///
/// Native pins are owned; the shield expander is shared across players and
/// passed into every operation. All three pin-error types are unified so a
/// single [`Error`] covers the native side.
pub struct BuzzerPlayer<BTN, ADC, LAMP> {
    button: ButtonRouting<BTN, ADC>,
    lamp: LampRouting<LAMP>,
}

impl<BTN, ADC, LAMP, PinErr> BuzzerPlayer<BTN, ADC, LAMP>
where
    BTN: InputPin<Error = PinErr>,
    ADC: AnalogInput<Error = PinErr>,
    LAMP: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    /// Create a player and establish pin directions.
    ///
    /// Shield-routed lines get their expander direction asserted here once;
    /// the per-call paths re-assert it anyway, because the expander is
    /// multiplexed across players and its direction state may have changed
    /// between any two of this player's accesses. Native pins arrive
    /// already configured: an embedded-hal input/output pin carries its
    /// direction in its type.
    pub fn new<X: ShieldGpio>(
        shield: &mut X,
        button: ButtonRouting<BTN, ADC>,
        lamp: LampRouting<LAMP>,
    ) -> Result<Self, Error<X::Error, PinErr>> {
        if let Some(channel) = button.shield_channel() {
            shield
                .pin_mode(channel, PinMode::Input)
                .map_err(Error::Shield)?;
        }
        if let Some(channel) = lamp.shield_channel() {
            shield
                .pin_mode(channel, PinMode::Output)
                .map_err(Error::Shield)?;
        }
        Ok(Self { button, lamp })
    }

    /// Whether the player's button is currently pressed.
    ///
    /// A pure function of the live hardware level; safe to call at any
    /// polling rate. Debouncing, if wanted, belongs to the caller.
    pub fn check_pressed<X: ShieldGpio>(
        &mut self,
        shield: &mut X,
    ) -> Result<bool, Error<X::Error, PinErr>> {
        match &mut self.button {
            ButtonRouting::Digital(pin) => pin.is_high().map_err(Error::Pin),
            ButtonRouting::Analog(adc) => {
                Ok(adc.read().map_err(Error::Pin)? >= ANALOG_PRESS_THRESHOLD)
            }
            ButtonRouting::Shield(channel) => {
                shield
                    .pin_mode(*channel, PinMode::Input)
                    .map_err(Error::Shield)?;
                let level = shield.digital_read(*channel).map_err(Error::Shield)?;
                Ok(level == Level::High)
            }
        }
    }

    /// Light the player's lamp. Idempotent.
    pub fn turn_on<X: ShieldGpio>(
        &mut self,
        shield: &mut X,
    ) -> Result<(), Error<X::Error, PinErr>> {
        self.drive_lamp(shield, Level::High)
    }

    /// Extinguish the player's lamp. Idempotent.
    pub fn stop_flash<X: ShieldGpio>(
        &mut self,
        shield: &mut X,
    ) -> Result<(), Error<X::Error, PinErr>> {
        self.drive_lamp(shield, Level::Low)
    }

    /// Blocking win indication: toggle the lamp [`FLASH_TOGGLE_COUNT`] times
    /// at [`FLASH_INTERVAL_MS`], then leave it lit.
    ///
    /// This occupies the calling thread for the full ~5 seconds and cannot
    /// be cancelled; the surrounding loop hands this player the moment
    /// exclusively to announce the win. The final write is unconditional so
    /// the winner's lamp stays lit whatever the toggle parity.
    pub fn flash<X: ShieldGpio, D: DelayNs>(
        &mut self,
        shield: &mut X,
        delay: &mut D,
    ) -> Result<(), Error<X::Error, PinErr>> {
        debug!("win flash: starting");
        let mut lit = false;
        for _ in 0..FLASH_TOGGLE_COUNT {
            if lit {
                self.stop_flash(shield)?;
            } else {
                self.turn_on(shield)?;
            }
            lit = !lit;
            delay.delay_ms(FLASH_INTERVAL_MS);
        }
        // Leave the lamp on to keep marking the winner.
        self.turn_on(shield)?;
        debug!("win flash: done, lamp left on");
        Ok(())
    }

    fn drive_lamp<X: ShieldGpio>(
        &mut self,
        shield: &mut X,
        level: Level,
    ) -> Result<(), Error<X::Error, PinErr>> {
        match &mut self.lamp {
            LampRouting::Digital(pin) => match level {
                Level::High => pin.set_high().map_err(Error::Pin),
                Level::Low => pin.set_low().map_err(Error::Pin),
            },
            LampRouting::Shield(channel) => {
                shield
                    .pin_mode(*channel, PinMode::Output)
                    .map_err(Error::Shield)?;
                shield.digital_write(*channel, level).map_err(Error::Shield)
            }
        }
    }
}
