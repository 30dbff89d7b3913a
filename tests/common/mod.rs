#![allow(dead_code)]

use strip_dial::{InputPort, RECORD_SIZE, Rgb, StateStorage, StripDriver};

pub const PIXELS: usize = 8;

/// Strip driver that keeps the buffer and counts flushes
#[derive(Debug, Default)]
pub struct MockStrip {
    pub pixels: [Rgb; PIXELS],
    pub brightness: u8,
    pub flushes: usize,
    /// Global brightness at every flush
    pub flushed_levels: Vec<u8>,
}

impl StripDriver for MockStrip {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels = [color; PIXELS];
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn flush(&mut self) {
        self.flushes += 1;
        self.flushed_levels.push(self.brightness);
    }
}

/// Byte-addressed storage, erased to 0xFF
#[derive(Debug)]
pub struct MemoryStorage {
    pub bytes: [u8; 64],
    pub reads: usize,
    pub writes: usize,
}

impl MemoryStorage {
    pub fn erased() -> Self {
        Self {
            bytes: [0xFF; 64],
            reads: 0,
            writes: 0,
        }
    }

    pub fn record(&self, address: u32) -> [u8; RECORD_SIZE] {
        let start = address as usize;
        let mut block = [0u8; RECORD_SIZE];
        block.copy_from_slice(&self.bytes[start..start + RECORD_SIZE]);
        block
    }
}

impl StateStorage for MemoryStorage {
    fn read(&mut self, address: u32, block: &mut [u8; RECORD_SIZE]) {
        self.reads += 1;
        *block = self.record(address);
    }

    fn write(&mut self, address: u32, block: &[u8; RECORD_SIZE]) {
        self.writes += 1;
        let start = address as usize;
        self.bytes[start..start + RECORD_SIZE].copy_from_slice(block);
    }
}

/// Raw pot sample that filters to brightness 100
pub const SAMPLE_FOR_100: u16 = 353;

#[derive(Debug)]
pub struct FakePort {
    pub pressed: bool,
    pub sample: u16,
    pub indicator: bool,
}

impl Default for FakePort {
    fn default() -> Self {
        Self {
            pressed: false,
            sample: SAMPLE_FOR_100,
            indicator: false,
        }
    }
}

impl InputPort for FakePort {
    fn button_pressed(&mut self) -> bool {
        self.pressed
    }

    fn brightness_sample(&mut self) -> u16 {
        self.sample
    }

    fn set_indicator(&mut self, on: bool) {
        self.indicator = on;
    }
}
