//! Power fades
//!
//! Turning the light on ramps the global brightness linearly from the
//! current level up to the stored brightness, one level per step; turning
//! it off ramps down to zero. The fade is a step function polled from the
//! main loop instead of a blocking loop, so input keeps being sampled and
//! a power flip mid-fade reverses from wherever the ramp currently is.

use embassy_time::{Duration, Instant};

use crate::StripDriver;
use crate::color::Rgb;
use crate::transition::ValueTransition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// Reported once by [`PowerController::tick`] when a fade reaches its end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeCompleted {
    pub direction: FadeDirection,
    pub level: u8,
}

#[derive(Debug, Clone)]
pub struct PowerController {
    /// Time spent on each brightness level
    step: Duration,
    level: ValueTransition<u8>,
    direction: Option<FadeDirection>,
    rendered: Option<u8>,
}

impl PowerController {
    pub const fn new(step: Duration) -> Self {
        Self {
            step,
            level: ValueTransition::new_level(0),
            direction: None,
            rendered: None,
        }
    }

    /// Start fading in toward `brightness`, or out toward zero
    ///
    /// A fade already running is replaced and the new one starts from the
    /// level it had reached.
    pub fn start(&mut self, direction: FadeDirection, brightness: u8, now: Instant) {
        let target = match direction {
            FadeDirection::In => brightness,
            FadeDirection::Out => 0,
        };
        let distance = self.level.current().abs_diff(target);
        self.level.set(target, self.step * u32::from(distance), now);
        self.direction = Some(direction);
        self.rendered = None;
        diag!(
            "power: fading {:?} from {} to {}",
            direction,
            self.level.current(),
            target
        );
    }

    /// Advance the running fade and render `color` at the new level
    ///
    /// Only renders when the level changed since the last render.
    pub fn tick<D: StripDriver>(
        &mut self,
        color: Rgb,
        now: Instant,
        driver: &mut D,
    ) -> Option<FadeCompleted> {
        let direction = self.direction?;
        let finished = if self.level.is_transitioning() {
            self.level.tick(now)
        } else {
            true
        };

        let level = self.level.current();
        if self.rendered != Some(level) {
            driver.fill(color);
            driver.set_brightness(level);
            driver.flush();
            self.rendered = Some(level);
        }

        if !finished {
            return None;
        }
        self.direction = None;
        diag!("power: fade {:?} done at {}", direction, level);
        Some(FadeCompleted { direction, level })
    }

    /// Track a brightness change made outside of a fade
    ///
    /// Ignored while fading.
    pub fn set_level(&mut self, level: u8, now: Instant) {
        if self.direction.is_none() {
            self.level.set(level, Duration::from_millis(0), now);
        }
    }

    pub const fn level(&self) -> u8 {
        self.level.current()
    }

    pub const fn is_fading(&self) -> bool {
        self.direction.is_some()
    }

    /// Direction of the running fade
    pub const fn direction(&self) -> Option<FadeDirection> {
        self.direction
    }
}
