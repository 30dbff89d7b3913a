//! Rotary encoder shared between interrupt handlers and the main loop
//!
//! The edge handlers run in interrupt context and preempt the main loop
//! at arbitrary points. Everything they touch lives in one cell behind a
//! `critical-section` mutex, so each handler and each main-loop access is
//! a single atomic read-modify-write. Persistent state is never reachable
//! from here; channel changes are only requested and the main loop applies
//! them. Turns made between a channel press and the main loop picking it up
//! are kept as an offset and land on the new channel.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Instant;

use crate::config::EncoderTimings;

/// Direction of a decoded rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Up,
    Down,
}

/// Outcome of an accepted rotation edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationStep {
    pub direction: RotationDirection,
    /// Whether the acceleration bonus was applied
    pub accelerated: bool,
    /// Accumulator after the step, already clamped
    ///
    /// `None` while a channel change is waiting for the main loop; the step
    /// is then kept as an offset from the new channel's value.
    pub value: Option<u8>,
}

/// Channel presses not yet applied by the main loop
#[derive(Debug, Clone, Copy)]
struct ChannelChange {
    advances: u8,
    /// Net rotation since the last press
    offset: i16,
    turned: bool,
}

#[derive(Debug, Clone, Copy)]
struct EncoderCell {
    value: u8,
    pending: bool,
    /// Every accepted edge is a rotation, so this doubles as the debounce
    /// reference
    last_rotation: Option<Instant>,
    channel_change: Option<ChannelChange>,
}

impl EncoderCell {
    const fn new(value: u8) -> Self {
        Self {
            value,
            pending: false,
            last_rotation: None,
            channel_change: None,
        }
    }
}

/// Quadrature decoder with debounce and speed-based acceleration
///
/// Meant to live in a `static` so both edge handlers and the main loop can
/// reach it:
///
/// ```ignore
/// static ENCODER: RotaryEncoder = RotaryEncoder::new();
///
/// fn on_clk_change() {
///     ENCODER.on_rotation_edge(now(), clk.is_high(), dt.is_high());
/// }
///
/// fn on_switch_falling() {
///     ENCODER.on_button_press();
/// }
/// ```
pub struct RotaryEncoder {
    timings: EncoderTimings,
    cell: Mutex<Cell<EncoderCell>>,
}

impl RotaryEncoder {
    pub const fn new() -> Self {
        Self::with_timings(EncoderTimings::DEFAULT)
    }

    pub const fn with_timings(timings: EncoderTimings) -> Self {
        Self {
            timings,
            cell: Mutex::new(Cell::new(EncoderCell::new(0))),
        }
    }

    /// Handle a transition on either quadrature line
    ///
    /// `clk` and `dt` are the levels of both lines, sampled once by the
    /// caller. Returns `None` when the edge falls inside the debounce window.
    pub fn on_rotation_edge(&self, now: Instant, clk: bool, dt: bool) -> Option<RotationStep> {
        critical_section::with(|cs| {
            let cell = self.cell.borrow(cs);
            let mut state = cell.get();

            let since_last = state
                .last_rotation
                .map(|last| now.saturating_duration_since(last));
            if since_last.is_some_and(|since| since < self.timings.debounce) {
                return None;
            }

            let accelerated = since_last.is_some_and(|since| {
                since > self.timings.debounce && since < self.timings.fast_rotation
            });
            let magnitude = if accelerated {
                1 + i16::from(self.timings.acceleration_bonus)
            } else {
                1
            };
            let direction = if clk == dt {
                RotationDirection::Up
            } else {
                RotationDirection::Down
            };
            let delta = match direction {
                RotationDirection::Up => magnitude,
                RotationDirection::Down => -magnitude,
            };

            let value = if let Some(change) = &mut state.channel_change {
                let limit = i16::from(u8::MAX);
                change.offset = (change.offset + delta).clamp(-limit, limit);
                change.turned = true;
                None
            } else {
                state.value = clamp_level(i16::from(state.value) + delta);
                state.pending = true;
                Some(state.value)
            };
            state.last_rotation = Some(now);
            cell.set(state);

            Some(RotationStep {
                direction,
                accelerated,
                value,
            })
        })
    }

    /// Handle a press of the encoder's integrated button
    ///
    /// Only records the request; [`Self::resolve_channel_change`] hands it
    /// to the main loop. Rotation after the press counts from the channel
    /// about to become active. Another press before the main loop catches
    /// up starts the offset over.
    pub fn on_button_press(&self) {
        critical_section::with(|cs| {
            let cell = self.cell.borrow(cs);
            let mut state = cell.get();
            let advances = state
                .channel_change
                .map_or(1, |change| change.advances.saturating_add(1));
            state.channel_change = Some(ChannelChange {
                advances,
                offset: 0,
                turned: false,
            });
            cell.set(state);
        });
    }

    /// Take the accumulator if a rotation happened since the last call
    pub fn take_pending_rotation(&self) -> Option<u8> {
        critical_section::with(|cs| {
            let cell = self.cell.borrow(cs);
            let mut state = cell.get();
            if !state.pending {
                return None;
            }
            state.pending = false;
            cell.set(state);
            Some(state.value)
        })
    }

    /// Apply the channel presses recorded since the last call
    ///
    /// `select` gets the number of presses, makes the resulting channel
    /// active and returns its current value. Runs inside the critical
    /// section, so no edge can slip in between. The offset turned since the
    /// last press is added to that value and left pending. Returns the new
    /// accumulator, or `None` when there was no press.
    pub fn resolve_channel_change(&self, select: impl FnOnce(u8) -> u8) -> Option<u8> {
        critical_section::with(|cs| {
            let cell = self.cell.borrow(cs);
            let mut state = cell.get();
            let change = state.channel_change.take()?;
            let base = select(change.advances);
            state.value = clamp_level(i16::from(base) + change.offset);
            state.pending = change.turned;
            cell.set(state);
            Some(state.value)
        })
    }

    /// Restart counting from `value` and drop any pending rotation
    pub fn seed(&self, value: u8) {
        critical_section::with(|cs| {
            let cell = self.cell.borrow(cs);
            let mut state = cell.get();
            state.value = value;
            state.pending = false;
            cell.set(state);
        });
    }

    /// Current accumulator
    pub fn value(&self) -> u8 {
        critical_section::with(|cs| self.cell.borrow(cs).get().value)
    }
}

impl Default for RotaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn clamp_level(value: i16) -> u8 {
    if value < 0 {
        0
    } else if value > u8::MAX as i16 {
        u8::MAX
    } else {
        value as u8
    }
}
