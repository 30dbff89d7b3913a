//! Potentiometer smoothing
//!
//! The raw analog reading jitters by a few counts even when the knob is
//! still. Samples are clamped to the usable travel of the pot, rescaled to
//! a brightness level and averaged over a short history.

use heapless::Deque;

use crate::math8::rescale;

/// Highest raw sample the potentiometer reaches in practice
pub const RAW_SAMPLE_MAX: u16 = 900;

/// Number of samples averaged by [`BrightnessFilter`]
pub const HISTORY_LEN: usize = 5;

/// Clamp a raw sample to `0..=RAW_SAMPLE_MAX` and rescale it to `0..=255`
pub const fn scale_sample(raw: u16) -> u8 {
    rescale(raw, RAW_SAMPLE_MAX, u8::MAX)
}

/// Fixed-capacity FIFO of samples with an integer mean
#[derive(Debug, Clone)]
pub struct SampleRing<const N: usize> {
    samples: Deque<u8, N>,
}

impl<const N: usize> SampleRing<N> {
    /// Create an empty ring
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Create a ring with every slot holding `value`
    pub fn filled(value: u8) -> Self {
        let mut ring = Self::new();
        while !ring.samples.is_full() {
            // Cannot fail, the loop stops at capacity
            let _ = ring.samples.push_back(value);
        }
        ring
    }

    /// Push a sample, evicting the oldest one when full
    pub fn push(&mut self, sample: u8) {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // Only fails for a zero-capacity ring, which keeps no history
        let _ = self.samples.push_back(sample);
    }

    /// Integer mean of the current contents, truncated. Zero when empty.
    #[allow(clippy::cast_possible_truncation)]
    pub fn mean(&self) -> u8 {
        let len = self.samples.len();
        if len == 0 {
            return 0;
        }
        let total: u32 = self.samples.iter().map(|&s| u32::from(s)).sum();
        (total / len as u32) as u8
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<const N: usize> Default for SampleRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Moving-average filter turning raw pot samples into a brightness level
#[derive(Debug, Clone)]
pub struct BrightnessFilter {
    history: SampleRing<HISTORY_LEN>,
}

impl BrightnessFilter {
    /// Create a filter whose history starts out at `initial`
    ///
    /// Seeding with the stored brightness keeps the first few readings
    /// after boot close to the saved level.
    pub fn new(initial: u8) -> Self {
        Self {
            history: SampleRing::filled(initial),
        }
    }

    /// Feed one raw sample and return the filtered brightness
    pub fn update(&mut self, raw: u16) -> u8 {
        self.history.push(scale_sample(raw));
        self.history.mean()
    }

    /// Current filtered brightness without feeding a sample
    pub fn value(&self) -> u8 {
        self.history.mean()
    }
}
