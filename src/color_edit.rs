//! Color editing with the rotary encoder
//!
//! Each turn writes the encoder value into the active channel and shows a
//! preview on the first pixel: the active channel alone at full intensity,
//! so it is obvious which channel is live. The preview is held for a while
//! after the last edit and then replaced by the steady color exactly once.

use embassy_time::{Duration, Instant};

use crate::StripDriver;
use crate::state::PersistentState;

/// Pixel that carries the channel preview
pub const PREVIEW_PIXEL: usize = 0;

#[derive(Debug, Clone)]
pub struct ColorEditState {
    timeout: Duration,
    last_edit: Option<Instant>,
    reverted: bool,
}

impl ColorEditState {
    pub const fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            last_edit: None,
            reverted: true,
        }
    }

    /// Commit an encoder value to the active channel and render it
    pub fn apply<D: StripDriver>(
        &mut self,
        state: &mut PersistentState,
        value: u8,
        now: Instant,
        driver: &mut D,
    ) {
        state.set_active_value(value);

        driver.fill(state.color());
        driver.set_pixel(PREVIEW_PIXEL, state.active_channel.primary());
        driver.flush();

        self.last_edit = Some(now);
        self.reverted = false;
        diag!("color: {}", state);
    }

    /// Whether the preview pixel should currently be shown
    pub fn is_previewing(&self, now: Instant) -> bool {
        self.last_edit
            .is_some_and(|last| now.saturating_duration_since(last) < self.timeout)
    }

    /// Keep the preview up, or drop it once the timeout has passed
    ///
    /// Returns `true` if anything was rendered.
    pub fn refresh<D: StripDriver>(
        &mut self,
        state: &PersistentState,
        now: Instant,
        driver: &mut D,
    ) -> bool {
        if self.is_previewing(now) {
            driver.set_pixel(PREVIEW_PIXEL, state.active_channel.primary());
            driver.flush();
            return true;
        }
        if self.reverted {
            return false;
        }

        driver.fill(state.color());
        driver.flush();
        self.reverted = true;
        true
    }

    /// Put the preview pixel back into the buffer without flushing
    ///
    /// Used when another render has just filled the strip.
    pub fn overlay<D: StripDriver>(&self, state: &PersistentState, now: Instant, driver: &mut D) {
        if self.is_previewing(now) {
            driver.set_pixel(PREVIEW_PIXEL, state.active_channel.primary());
        }
    }
}
