//! Simulated pin and shield backend for host-side tests.
//!
//! The driver's behavior is hardware-bound, so exercising it on the host
//! needs a backend that exposes the same three expander primitives plus
//! native pins with observable state. [`SimShield`] keeps an ordered
//! operation log so tests can assert not just final levels but the access
//! pattern (direction re-asserted before every shield read/write).
//!
//! Native pins are moved into the player at construction, so [`SimPin`] and
//! [`SimAnalog`] hand back a shared probe for stimulating inputs and
//! observing outputs afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::routing::AnalogInput;
use crate::shield::{Channel, Level, PinMode, ShieldGpio, SHIELD_CHANNEL_COUNT};

/// One recorded expander access, by raw channel index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShieldOp {
    /// `pin_mode(channel, mode)`
    PinMode(u8, PinMode),
    /// `digital_write(channel, level)`
    Write(u8, Level),
    /// `digital_read(channel)`
    Read(u8),
}

#[derive(Clone, Copy)]
struct ChannelState {
    mode: Option<PinMode>,
    level: Level,
}

/// In-memory stand-in for the shield's 8-channel GPIO expander.
pub struct SimShield {
    channels: [ChannelState; SHIELD_CHANNEL_COUNT as usize],
    ops: Vec<ShieldOp>,
}

impl SimShield {
    pub fn new() -> Self {
        Self {
            channels: [ChannelState {
                mode: None,
                level: Level::Low,
            }; SHIELD_CHANNEL_COUNT as usize],
            ops: Vec::new(),
        }
    }

    /// Force a channel's level, simulating an external button press or
    /// release on that line.
    pub fn set_level(&mut self, channel: Channel, level: Level) {
        self.channels[channel.index() as usize].level = level;
    }

    /// Current level of a channel.
    pub fn level(&self, channel: Channel) -> Level {
        self.channels[channel.index() as usize].level
    }

    /// Last direction set on a channel, if any.
    pub fn mode(&self, channel: Channel) -> Option<PinMode> {
        self.channels[channel.index() as usize].mode
    }

    /// The ordered access log since construction or the last
    /// [`clear_ops`](Self::clear_ops).
    pub fn ops(&self) -> &[ShieldOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Default for SimShield {
    fn default() -> Self {
        Self::new()
    }
}

impl ShieldGpio for SimShield {
    type Error = Infallible;

    fn pin_mode(&mut self, channel: Channel, mode: PinMode) -> Result<(), Self::Error> {
        self.ops.push(ShieldOp::PinMode(channel.index(), mode));
        self.channels[channel.index() as usize].mode = Some(mode);
        Ok(())
    }

    fn digital_write(&mut self, channel: Channel, level: Level) -> Result<(), Self::Error> {
        self.ops.push(ShieldOp::Write(channel.index(), level));
        self.channels[channel.index() as usize].level = level;
        Ok(())
    }

    fn digital_read(&mut self, channel: Channel) -> Result<Level, Self::Error> {
        self.ops.push(ShieldOp::Read(channel.index()));
        Ok(self.channels[channel.index() as usize].level)
    }
}

struct PinState {
    level: Level,
    writes: Vec<Level>,
}

/// Simulated native digital pin.
///
/// Serves as both an input (stimulate through the probe) and an output
/// (levels written by the driver are recorded and observable).
pub struct SimPin {
    state: Rc<RefCell<PinState>>,
}

/// Shared handle onto a [`SimPin`] that outlives the move into the player.
#[derive(Clone)]
pub struct PinProbe {
    state: Rc<RefCell<PinState>>,
}

impl SimPin {
    pub fn new(initial: Level) -> (Self, PinProbe) {
        let state = Rc::new(RefCell::new(PinState {
            level: initial,
            writes: Vec::new(),
        }));
        (
            Self {
                state: Rc::clone(&state),
            },
            PinProbe { state },
        )
    }
}

impl PinProbe {
    /// Stimulate the line, as a button press/release would.
    pub fn set_level(&self, level: Level) {
        self.state.borrow_mut().level = level;
    }

    /// Current line level.
    pub fn level(&self) -> Level {
        self.state.borrow().level
    }

    /// Every level the driver has written, in order.
    pub fn writes(&self) -> Vec<Level> {
        self.state.borrow().writes.clone()
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.state.borrow().level == Level::High)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.state.borrow().level == Level::Low)
    }
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.level = Level::Low;
        state.writes.push(Level::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.level = Level::High;
        state.writes.push(Level::High);
        Ok(())
    }
}

/// Simulated analog pin with a settable raw reading.
pub struct SimAnalog {
    value: Rc<RefCell<u16>>,
}

/// Shared handle for driving a [`SimAnalog`] reading from a test.
#[derive(Clone)]
pub struct AnalogProbe {
    value: Rc<RefCell<u16>>,
}

impl SimAnalog {
    pub fn new(initial: u16) -> (Self, AnalogProbe) {
        let value = Rc::new(RefCell::new(initial));
        (
            Self {
                value: Rc::clone(&value),
            },
            AnalogProbe { value },
        )
    }
}

impl AnalogProbe {
    pub fn set_value(&self, value: u16) {
        *self.value.borrow_mut() = value;
    }
}

impl AnalogInput for SimAnalog {
    type Error = Infallible;

    fn read(&mut self) -> Result<u16, Self::Error> {
        Ok(*self.value.borrow())
    }
}

/// Recording delay; no real time passes.
pub struct SimDelay {
    delays_ns: Vec<u32>,
}

impl SimDelay {
    pub fn new() -> Self {
        Self {
            delays_ns: Vec::new(),
        }
    }

    /// Recorded delays converted to whole milliseconds.
    pub fn delays_ms(&self) -> Vec<u32> {
        self.delays_ns.iter().map(|ns| ns / 1_000_000).collect()
    }
}

impl Default for SimDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delays_ns.push(ns);
    }
}
