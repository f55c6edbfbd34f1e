//! Host-side scenario harness for scripted quiz-round flows.
//!
//! Couples several players with mixed routings, one simulated shield, and a
//! recording delay, and plays the role of the game controller's polling
//! loop: stimulate buttons, poll for the first pressed player, announce the
//! winner. Tests in `tests/` drive whole-round scenarios through this.

use buzzer_player::sim::{AnalogProbe, PinProbe, ShieldOp, SimAnalog, SimDelay, SimPin, SimShield};
use buzzer_player::{
    BuzzerPlayer, ButtonRouting, Channel, LampRouting, Level, ANALOG_PRESS_THRESHOLD,
};

type SimPlayer = BuzzerPlayer<SimPin, SimAnalog, SimPin>;

enum ButtonStimulus {
    Digital(PinProbe),
    Analog(AnalogProbe),
    Shield(Channel),
}

enum LampReadout {
    Digital(PinProbe),
    Shield(Channel),
}

struct PlayerSlot {
    player: SimPlayer,
    button: ButtonStimulus,
    lamp: LampReadout,
}

/// Small helper that couples players, simulated shield, and delay for
/// scenario tests. Players are addressed by the index their `add_*` call
/// returned.
pub struct RoundHarness {
    shield: SimShield,
    delay: SimDelay,
    players: Vec<PlayerSlot>,
}

impl RoundHarness {
    pub fn new() -> Self {
        Self {
            shield: SimShield::new(),
            delay: SimDelay::new(),
            players: Vec::new(),
        }
    }

    /// Add a player with a native digital button and a native lamp.
    pub fn add_digital_player(&mut self) -> usize {
        let (button_pin, button) = SimPin::new(Level::Low);
        let (lamp_pin, lamp) = SimPin::new(Level::Low);
        let player = SimPlayer::new(
            &mut self.shield,
            ButtonRouting::Digital(button_pin),
            LampRouting::Digital(lamp_pin),
        )
        .expect("sim backend is infallible");
        self.push_slot(player, ButtonStimulus::Digital(button), LampReadout::Digital(lamp))
    }

    /// Add a player with a native analog (threshold) button and a native lamp.
    pub fn add_analog_player(&mut self) -> usize {
        let (adc, button) = SimAnalog::new(0);
        let (lamp_pin, lamp) = SimPin::new(Level::Low);
        let player = SimPlayer::new(
            &mut self.shield,
            ButtonRouting::Analog(adc),
            LampRouting::Digital(lamp_pin),
        )
        .expect("sim backend is infallible");
        self.push_slot(player, ButtonStimulus::Analog(button), LampReadout::Digital(lamp))
    }

    /// Add a player with both lines on shield expander channels.
    pub fn add_shield_player(&mut self, button_channel: u8, lamp_channel: u8) -> usize {
        let button = Channel::new(button_channel).expect("test channel in range");
        let lamp = Channel::new(lamp_channel).expect("test channel in range");
        let player = SimPlayer::new(
            &mut self.shield,
            ButtonRouting::Shield(button),
            LampRouting::Shield(lamp),
        )
        .expect("sim backend is infallible");
        self.push_slot(player, ButtonStimulus::Shield(button), LampReadout::Shield(lamp))
    }

    fn push_slot(
        &mut self,
        player: SimPlayer,
        button: ButtonStimulus,
        lamp: LampReadout,
    ) -> usize {
        self.players.push(PlayerSlot {
            player,
            button,
            lamp,
        });
        self.players.len() - 1
    }

    /// Press a player's button (analog buttons jump to full scale).
    pub fn press(&mut self, index: usize) {
        match &self.players[index].button {
            ButtonStimulus::Digital(probe) => probe.set_level(Level::High),
            ButtonStimulus::Analog(probe) => probe.set_value(1023),
            ButtonStimulus::Shield(channel) => self.shield.set_level(*channel, Level::High),
        }
    }

    /// Release a player's button.
    pub fn release(&mut self, index: usize) {
        match &self.players[index].button {
            ButtonStimulus::Digital(probe) => probe.set_level(Level::Low),
            ButtonStimulus::Analog(probe) => probe.set_value(0),
            ButtonStimulus::Shield(channel) => self.shield.set_level(*channel, Level::Low),
        }
    }

    /// Drive an analog button to a specific raw reading.
    ///
    /// Panics if the player's button is not analog-routed.
    pub fn set_analog_reading(&mut self, index: usize, value: u16) {
        match &self.players[index].button {
            ButtonStimulus::Analog(probe) => probe.set_value(value),
            _ => panic!("player {index} has no analog button"),
        }
    }

    /// One pass of the controller's polling loop: the first player whose
    /// button reads pressed wins the poll.
    pub fn poll_for_winner(&mut self) -> Option<usize> {
        for (index, slot) in self.players.iter_mut().enumerate() {
            if slot
                .player
                .check_pressed(&mut self.shield)
                .expect("sim backend is infallible")
            {
                return Some(index);
            }
        }
        None
    }

    /// Run the blocking win flash for a player.
    pub fn announce_winner(&mut self, index: usize) {
        self.players[index]
            .player
            .flash(&mut self.shield, &mut self.delay)
            .expect("sim backend is infallible");
    }

    pub fn turn_on(&mut self, index: usize) {
        self.players[index]
            .player
            .turn_on(&mut self.shield)
            .expect("sim backend is infallible");
    }

    pub fn stop_flash(&mut self, index: usize) {
        self.players[index]
            .player
            .stop_flash(&mut self.shield)
            .expect("sim backend is infallible");
    }

    /// Whether a player's lamp currently reads high.
    pub fn lamp_is_lit(&self, index: usize) -> bool {
        match &self.players[index].lamp {
            LampReadout::Digital(probe) => probe.level() == Level::High,
            LampReadout::Shield(channel) => self.shield.level(*channel) == Level::High,
        }
    }

    /// Levels written to a player's lamp so far, in order.
    pub fn lamp_writes(&self, index: usize) -> Vec<Level> {
        match &self.players[index].lamp {
            LampReadout::Digital(probe) => probe.writes(),
            LampReadout::Shield(channel) => self
                .shield
                .ops()
                .iter()
                .filter_map(|op| match op {
                    ShieldOp::Write(ch, level) if *ch == channel.index() => Some(*level),
                    _ => None,
                })
                .collect(),
        }
    }

    /// Recorded delays in milliseconds.
    pub fn delays_ms(&self) -> Vec<u32> {
        self.delay.delays_ms()
    }

    /// Ordered shield access log.
    pub fn shield_ops(&self) -> &[ShieldOp] {
        self.shield.ops()
    }

    pub fn clear_shield_ops(&mut self) {
        self.shield.clear_ops();
    }

    /// The raw reading at which an analog button counts as pressed,
    /// re-exported for boundary tests.
    pub fn analog_threshold() -> u16 {
        ANALOG_PRESS_THRESHOLD
    }
}

impl Default for RoundHarness {
    fn default() -> Self {
        Self::new()
    }
}
