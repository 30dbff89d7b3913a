#![no_std]

#[macro_use]
mod log;

pub mod brightness;
pub mod button;
pub mod color;
pub mod color_edit;
pub mod config;
pub mod controller;
pub mod encoder;
pub mod math8;
pub mod power;
pub mod preset;
pub mod state;
pub mod storage;
pub mod transition;

pub use brightness::{BrightnessFilter, SampleRing};
pub use button::{ButtonAction, ButtonInput};
pub use color::Rgb;
pub use color_edit::ColorEditState;
pub use config::{ButtonTimings, ControllerConfig, EncoderTimings};
pub use controller::Controller;
pub use encoder::{RotaryEncoder, RotationStep};
pub use power::{FadeCompleted, FadeDirection, PowerController};
pub use preset::PRESETS;
pub use state::{ColorChannel, PersistentState};
pub use storage::{DecodeError, RECORD_SIZE};

pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver
///
/// Owns the pixel buffer and the bus protocol. Only the controller
/// talks to it, never interrupt handlers.
pub trait StripDriver {
    /// Set a single pixel in the buffer
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Set every pixel in the buffer to one color
    fn fill(&mut self, color: Rgb);

    /// Set the global brightness scalar applied on flush
    fn set_brightness(&mut self, level: u8);

    /// Push the buffer to the hardware
    ///
    /// May block until the bus is idle.
    fn flush(&mut self);
}

/// Non-volatile storage holding a single state record
///
/// Reads and writes are synchronous and unchecked; integrity is
/// verified by [`storage::decode`].
pub trait StateStorage {
    /// Read a record from `address`
    fn read(&mut self, address: u32, block: &mut [u8; RECORD_SIZE]);

    /// Write a record to `address`
    fn write(&mut self, address: u32, block: &[u8; RECORD_SIZE]);
}

/// Polled inputs and the button indicator output
pub trait InputPort {
    /// Current level of the power/preset button (`true` = pressed)
    fn button_pressed(&mut self) -> bool;

    /// Raw potentiometer sample (0-1023)
    fn brightness_sample(&mut self) -> u16;

    /// Drive the indicator LED next to the button
    fn set_indicator(&mut self, on: bool);
}
