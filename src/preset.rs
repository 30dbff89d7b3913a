//! Fixed preset palette
//!
//! Selected by holding the power button; indices always wrap around the
//! palette length.

use crate::color::Rgb;

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

/// Preset colors, in cycling order
pub const PRESETS: [Rgb; 26] = [
    // Warm
    rgb(255, 147, 41),  // candle white
    rgb(255, 180, 100), // soft amber
    rgb(255, 120, 30),  // deep orange
    rgb(255, 60, 0),    // campfire
    // Whites
    rgb(255, 255, 255), // pure white
    rgb(255, 244, 229), // warm white
    rgb(201, 226, 255), // daylight
    // Saturated
    rgb(255, 0, 0),
    rgb(0, 255, 0),
    rgb(0, 0, 255),
    rgb(255, 0, 255),
    rgb(0, 255, 255),
    rgb(255, 255, 0),
    // Mood
    rgb(138, 43, 226),  // blue violet
    rgb(255, 20, 147),  // hot pink
    rgb(255, 105, 180), // pink
    rgb(64, 224, 208),  // turquoise
    rgb(0, 255, 127),   // spring green
    // Natural
    rgb(255, 140, 0),  // sunset orange
    rgb(30, 144, 255), // sky blue
    rgb(50, 205, 50),  // lime green
    rgb(255, 69, 0),   // red orange
    // Muted
    rgb(100, 100, 150),
    rgb(150, 100, 100),
    rgb(100, 150, 100),
    rgb(80, 50, 120), // night purple
];

/// Preset at `index`, wrapping past the end of the palette
pub const fn preset(index: usize) -> Rgb {
    PRESETS[index % PRESETS.len()]
}

/// Index following `index`, wrapping to 0 after the last preset
pub const fn next_index(index: usize) -> usize {
    (index + 1) % PRESETS.len()
}
