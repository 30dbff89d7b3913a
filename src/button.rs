//! Power/preset button
//!
//! Polled once per loop iteration. A short tap toggles power. Holding the
//! button while the light is on steps through the preset palette, blinking
//! the indicator on each step, and releasing it loads the preset reached.
//! A hold while the light is off never steps, so its release loads the
//! first preset.

use embassy_time::Instant;

use crate::config::ButtonTimings;
use crate::preset;

/// Action produced when the button is released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    TogglePower,
    LoadPreset(usize),
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Held {
        since: Instant,
        preset_index: usize,
        last_step: Option<Instant>,
    },
}

/// Debounced tap/hold classifier
#[derive(Debug, Clone)]
pub struct ButtonInput {
    timings: ButtonTimings,
    /// Last raw level seen and when it first appeared
    raw: bool,
    raw_since: Instant,
    /// Level accepted after debouncing
    stable: bool,
    phase: Phase,
    blink_until: Option<Instant>,
}

impl ButtonInput {
    pub const fn new(timings: ButtonTimings) -> Self {
        Self {
            timings,
            raw: false,
            raw_since: Instant::from_millis(0),
            stable: false,
            phase: Phase::Idle,
            blink_until: None,
        }
    }

    /// Feed the current button level
    ///
    /// `power_on` gates preset cycling: while the light is off a long hold
    /// stays on preset 0.
    pub fn poll(&mut self, now: Instant, pressed: bool, power_on: bool) -> Option<ButtonAction> {
        if pressed != self.raw {
            self.raw = pressed;
            self.raw_since = now;
        }

        let mut action = None;
        if self.raw != self.stable
            && now.saturating_duration_since(self.raw_since) >= self.timings.debounce
        {
            self.stable = self.raw;
            // Edges are dated when the level first changed, not when the
            // debounce accepted it.
            let edge_at = self.raw_since;
            if self.stable {
                self.phase = Phase::Held {
                    since: edge_at,
                    preset_index: 0,
                    last_step: None,
                };
            } else {
                action = self.release(edge_at);
            }
        }

        if self.stable && self.raw && power_on {
            self.step_presets(now);
        }

        action
    }

    fn release(&mut self, at: Instant) -> Option<ButtonAction> {
        let Phase::Held {
            since,
            preset_index,
            ..
        } = self.phase
        else {
            return None;
        };
        self.phase = Phase::Idle;

        if at.saturating_duration_since(since) < self.timings.hold {
            diag!("button: tap, toggling power");
            Some(ButtonAction::TogglePower)
        } else {
            diag!("button: hold released on preset {}", preset_index);
            Some(ButtonAction::LoadPreset(preset_index))
        }
    }

    fn step_presets(&mut self, now: Instant) {
        let Phase::Held {
            since,
            preset_index,
            last_step,
        } = &mut self.phase
        else {
            return;
        };
        if now.saturating_duration_since(*since) <= self.timings.hold {
            return;
        }
        let cycle = self.timings.cycle;
        let due = last_step.is_none_or(|last| now.saturating_duration_since(last) > cycle);
        if !due {
            return;
        }

        *preset_index = preset::next_index(*preset_index);
        *last_step = Some(now);
        self.blink_until = Some(now + self.timings.blink);
        diag!("button: held, preset {}", preset_index);
    }

    /// Preset reached by the current hold, 0 when the button is up
    pub const fn preset_index(&self) -> usize {
        match self.phase {
            Phase::Idle => 0,
            Phase::Held { preset_index, .. } => preset_index,
        }
    }

    /// Whether the button is currently considered pressed
    pub const fn is_held(&self) -> bool {
        matches!(self.phase, Phase::Held { .. })
    }

    /// Level of the indicator LED
    ///
    /// Follows the power state while the button is up, stays dark while it
    /// is held, and flashes on each preset step.
    pub fn indicator(&self, now: Instant, power_on: bool) -> bool {
        if self.blink_until.is_some_and(|until| now < until) {
            return true;
        }
        if self.is_held() {
            return false;
        }
        power_on
    }
}

impl Default for ButtonInput {
    fn default() -> Self {
        Self::new(ButtonTimings::DEFAULT)
    }
}
