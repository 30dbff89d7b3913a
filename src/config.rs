//! Controller configuration
//!
//! All timing thresholds default to the values the hardware was tuned
//! with; tests and alternate boards can override them.

use embassy_time::Duration;

/// Timing of the quadrature decoder
#[derive(Debug, Clone, Copy)]
pub struct EncoderTimings {
    /// Edges closer than this to the previous accepted edge are dropped
    pub debounce: Duration,
    /// Rotations faster than this get the acceleration bonus
    pub fast_rotation: Duration,
    /// Extra steps added for a fast rotation
    pub acceleration_bonus: u8,
}

impl EncoderTimings {
    pub const DEFAULT: Self = Self {
        debounce: Duration::from_millis(5),
        fast_rotation: Duration::from_millis(100),
        acceleration_bonus: 5,
    };
}

impl Default for EncoderTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Timing of the power/preset button
#[derive(Debug, Clone, Copy)]
pub struct ButtonTimings {
    /// How long a raw level must be stable before it is accepted
    pub debounce: Duration,
    /// Presses at least this long are holds, shorter ones are taps
    pub hold: Duration,
    /// Interval between preset steps while held
    pub cycle: Duration,
    /// How long the indicator lights up on each preset step
    pub blink: Duration,
}

impl ButtonTimings {
    pub const DEFAULT: Self = Self {
        debounce: Duration::from_millis(20),
        hold: Duration::from_millis(500),
        cycle: Duration::from_millis(500),
        blink: Duration::from_millis(100),
    };
}

impl Default for ButtonTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for the controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Storage address of the state record
    pub storage_address: u32,
    /// Delay between two brightness levels of a power fade
    pub fade_step: Duration,
    /// How long the single-pixel channel preview stays up after an edit
    pub preview_timeout: Duration,
    pub button: ButtonTimings,
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        storage_address: 0,
        fade_step: Duration::from_millis(5),
        preview_timeout: Duration::from_millis(2000),
        button: ButtonTimings::DEFAULT,
    };
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
