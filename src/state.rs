//! Save-worthy light state
//!
//! Everything here survives a power cycle. The controller is the only
//! owner; the encoder's interrupt handlers never see it.

use core::fmt;

pub use crate::color::ColorChannel;
use crate::color::Rgb;
use crate::preset;

/// Brightness, color and the channel the encoder edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistentState {
    pub brightness: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub active_channel: ColorChannel,
}

impl PersistentState {
    /// State used before anything has been loaded, and whenever the stored
    /// record is unusable
    pub const DEFAULT: Self = Self {
        brightness: 100,
        red: 200,
        green: 100,
        blue: 70,
        active_channel: ColorChannel::Red,
    };

    /// Steady-state fill color
    pub const fn color(&self) -> Rgb {
        Rgb {
            r: self.red,
            g: self.green,
            b: self.blue,
        }
    }

    pub const fn set_color(&mut self, color: Rgb) {
        self.red = color.r;
        self.green = color.g;
        self.blue = color.b;
    }

    pub const fn channel_value(&self, channel: ColorChannel) -> u8 {
        match channel {
            ColorChannel::Red => self.red,
            ColorChannel::Green => self.green,
            ColorChannel::Blue => self.blue,
        }
    }

    /// Write `value` into the channel currently being edited
    pub const fn set_active_value(&mut self, value: u8) {
        match self.active_channel {
            ColorChannel::Red => self.red = value,
            ColorChannel::Green => self.green = value,
            ColorChannel::Blue => self.blue = value,
        }
    }

    /// Make `next` the edited channel
    ///
    /// Returns the channel's current value, which the encoder must be
    /// seeded with so turning continues from there.
    pub const fn select_channel(&mut self, next: ColorChannel) -> u8 {
        self.active_channel = next;
        self.channel_value(next)
    }

    /// Advance Red → Green → Blue → Red, see [`Self::select_channel`]
    pub const fn select_next_channel(&mut self) -> u8 {
        let next = self.active_channel.next();
        self.select_channel(next)
    }

    /// Replace the color with a preset, wrapping `index` into the palette
    pub const fn load_preset(&mut self, index: usize) {
        self.set_color(preset::preset(index));
    }
}

impl Default for PersistentState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PersistentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R{} G{} B{} brightness {} editing {}",
            self.red,
            self.green,
            self.blue,
            self.brightness,
            self.active_channel.as_str()
        )
    }
}
