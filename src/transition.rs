use embassy_time::{Duration, Instant};

use crate::math8::lerp_by_time;

/// Interpolates between a source and a target value over elapsed time
pub type ValueBlender<T> = fn(T, T, Duration, Duration) -> T;

/// Transition for values of type `T`
#[derive(Debug, Clone)]
pub struct ValueTransition<T: Copy> {
    /// Blender function
    blend: ValueBlender<T>,
    /// Current interpolated value
    current: T,
    /// Value at the start of transition
    source: T,
    /// Target value (None if no transition in progress)
    target: Option<T>,
    /// Total transition duration
    duration: Duration,
    /// Time at which the transition started
    start_time: Instant,
}

impl<T: Copy> ValueTransition<T> {
    /// Create a new value transition
    pub const fn new(initial: T, blend: ValueBlender<T>) -> Self {
        Self {
            blend,
            current: initial,
            source: initial,
            target: None,
            duration: Duration::from_millis(0),
            start_time: Instant::from_millis(0),
        }
    }

    /// Get current value
    pub const fn current(&self) -> T {
        self.current
    }

    /// Get the value the transition is heading to
    pub fn target(&self) -> T {
        self.target.unwrap_or(self.current)
    }

    /// Check if a transition is in progress
    pub const fn is_transitioning(&self) -> bool {
        self.target.is_some()
    }

    /// Set value for transition
    ///
    /// A transition already in progress is abandoned; the new one starts
    /// from the current interpolated value.
    pub fn set(&mut self, value: T, duration: Duration, start_time: Instant) {
        self.start_time = start_time;
        if duration.as_millis() == 0 {
            self.current = value;
            self.source = value;
            self.target = None;
            self.duration = Duration::from_millis(0);
        } else {
            self.source = self.current;
            self.target = Some(value);
            self.duration = duration;
        }
    }

    /// Update transition state
    ///
    /// Returns `true` on the call that completes the transition.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed >= self.duration {
            self.current = target;
            self.source = target;
            self.target = None;
            return true;
        }

        self.current = (self.blend)(self.source, target, elapsed, self.duration);
        false
    }
}

impl ValueTransition<u8> {
    /// Create a new linear u8 transition
    pub const fn new_level(initial: u8) -> Self {
        Self::new(initial, lerp_by_time)
    }
}
