//! Main loop
//!
//! The controller owns the persistent state, the strip driver, the storage
//! and the polled inputs, and is the only place state changes are
//! committed. Call [`Controller::tick`] continuously from the main loop;
//! the encoder's edge handlers only ever touch the shared
//! [`RotaryEncoder`].

use embassy_time::Instant;

use crate::brightness::BrightnessFilter;
use crate::button::{ButtonAction, ButtonInput};
use crate::color::BLACK;
use crate::color_edit::ColorEditState;
use crate::config::ControllerConfig;
use crate::encoder::RotaryEncoder;
use crate::power::{FadeDirection, PowerController};
use crate::state::PersistentState;
use crate::{InputPort, StateStorage, StripDriver, storage};

/// Light controller - ties inputs, state and the strip together
pub struct Controller<'a, D: StripDriver, S: StateStorage, P: InputPort> {
    // External dependencies and configuration
    driver: D,
    storage: S,
    port: P,
    encoder: &'a RotaryEncoder,
    config: ControllerConfig,

    // Persistent and runtime state
    state: PersistentState,
    power_on: bool,
    last_power_on: bool,
    rendered_brightness: u8,

    // Components
    button: ButtonInput,
    brightness: BrightnessFilter,
    color_edit: ColorEditState,
    power: PowerController,
}

impl<'a, D: StripDriver, S: StateStorage, P: InputPort> Controller<'a, D, S, P> {
    /// Blank the strip, load the stored state and start powered off
    pub fn boot(
        mut driver: D,
        mut storage: S,
        port: P,
        encoder: &'a RotaryEncoder,
        config: ControllerConfig,
    ) -> Self {
        driver.fill(BLACK);
        driver.flush();

        let state = storage::load(&mut storage, config.storage_address);
        encoder.seed(state.channel_value(state.active_channel));

        Self {
            driver,
            storage,
            port,
            encoder,
            config,
            state,
            power_on: false,
            last_power_on: false,
            rendered_brightness: state.brightness,
            button: ButtonInput::new(config.button),
            brightness: BrightnessFilter::new(state.brightness),
            color_edit: ColorEditState::new(config.preview_timeout),
            power: PowerController::new(config.fade_step),
        }
    }

    /// Run one main-loop iteration
    pub fn tick(&mut self, now: Instant) {
        self.poll_inputs(now);
        self.process_encoder(now);

        if self.power_on != self.last_power_on {
            self.last_power_on = self.power_on;
            let direction = if self.power_on {
                FadeDirection::In
            } else {
                FadeDirection::Out
            };
            self.power.start(direction, self.state.brightness, now);
        }

        if let Some(done) = self.power.tick(self.state.color(), now, &mut self.driver) {
            match done.direction {
                FadeDirection::In => self.rendered_brightness = done.level,
                FadeDirection::Out => {
                    storage::store(
                        &mut self.storage,
                        self.config.storage_address,
                        &self.state,
                    );
                }
            }
        }

        if !self.is_steady_on() {
            return;
        }

        self.color_edit.refresh(&self.state, now, &mut self.driver);
        if self.state.brightness != self.rendered_brightness {
            self.show_brightness(now);
        }
    }

    /// Sample the button and the potentiometer, drive the indicator
    fn poll_inputs(&mut self, now: Instant) {
        let pressed = self.port.button_pressed();
        if let Some(action) = self.button.poll(now, pressed, self.power_on) {
            self.apply_button(action, now);
        }

        let sample = self.port.brightness_sample();
        self.state.brightness = self.brightness.update(sample);

        let indicator = self.button.indicator(now, self.power_on);
        self.port.set_indicator(indicator);
    }

    fn apply_button(&mut self, action: ButtonAction, now: Instant) {
        match action {
            ButtonAction::TogglePower => {
                self.power_on = !self.power_on;
                diag!("power toggled: {}", if self.power_on { "on" } else { "off" });
            }
            ButtonAction::LoadPreset(index) => {
                self.state.load_preset(index);
                diag!("loaded preset {}: {}", index, self.state);
                if self.is_steady_on() {
                    self.show_brightness(now);
                }
            }
        }
    }

    /// Apply pending rotations and channel changes
    ///
    /// Rotations are only consumed while the light is steadily on; until
    /// then they stay pending in the encoder. Turns made before a channel
    /// press still belong to the old channel, so they go first.
    fn process_encoder(&mut self, now: Instant) {
        self.apply_pending_rotation(now);

        let state = &mut self.state;
        let resolved = self.encoder.resolve_channel_change(|advances| {
            let mut seed = state.channel_value(state.active_channel);
            for _ in 0..advances {
                seed = state.select_next_channel();
            }
            seed
        });
        if let Some(value) = resolved {
            diag!(
                "editing {} channel, starting at {}",
                self.state.active_channel.as_str(),
                value
            );
            self.apply_pending_rotation(now);
        }
    }

    fn apply_pending_rotation(&mut self, now: Instant) {
        if !self.is_steady_on() {
            return;
        }
        if let Some(value) = self.encoder.take_pending_rotation() {
            self.color_edit
                .apply(&mut self.state, value, now, &mut self.driver);
        }
    }

    /// Re-render the steady color at the current brightness
    fn show_brightness(&mut self, now: Instant) {
        self.driver.fill(self.state.color());
        self.color_edit.overlay(&self.state, now, &mut self.driver);
        self.driver.set_brightness(self.state.brightness);
        self.driver.flush();
        self.rendered_brightness = self.state.brightness;
        self.power.set_level(self.state.brightness, now);
    }

    /// On, and not in the middle of a fade
    fn is_steady_on(&self) -> bool {
        self.power_on && self.last_power_on && !self.power.is_fading()
    }

    pub const fn state(&self) -> &PersistentState {
        &self.state
    }

    pub const fn is_on(&self) -> bool {
        self.power_on
    }

    pub const fn is_fading(&self) -> bool {
        self.power.is_fading()
    }

    /// Preset the current button hold has reached
    pub const fn preset_index(&self) -> usize {
        self.button.preset_index()
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn port(&self) -> &P {
        &self.port
    }

    pub const fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}
