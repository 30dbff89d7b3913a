//! Persistent state record
//!
//! The state is written once per power-off, so the record is a small
//! fixed-size block:
//!
//! ```text
//! | 0..2  | magic "SD"                           |
//! | 2     | format version                       |
//! | 3     | brightness                           |
//! | 4..7  | red, green, blue                     |
//! | 7     | active channel (0 = R, 1 = G, 2 = B) |
//! | 8..12 | CRC-32 of bytes 0..8, little endian  |
//! ```
//!
//! Erased flash, a record from another firmware or a torn write fails the
//! checks in [`decode`] and [`load`] falls back to the default state.

use core::fmt;

use crate::StateStorage;
use crate::color::ColorChannel;
use crate::state::PersistentState;

/// Size of an encoded record in bytes
pub const RECORD_SIZE: usize = 12;

const MAGIC: [u8; 2] = *b"SD";
const VERSION: u8 = 1;
const PAYLOAD_SIZE: usize = 8;

/// Reasons a stored record is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The record does not start with the expected magic bytes
    BadMagic,
    /// The record was written by an incompatible format version
    UnsupportedVersion(u8),
    /// The checksum does not match the payload
    ChecksumMismatch,
    /// The active channel byte is out of range
    InvalidChannel(u8),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic => f.write_str("bad magic"),
            Self::UnsupportedVersion(version) => write!(f, "unsupported version {version}"),
            Self::ChecksumMismatch => f.write_str("checksum mismatch"),
            Self::InvalidChannel(raw) => write!(f, "invalid channel {raw}"),
        }
    }
}

impl core::error::Error for DecodeError {}

fn checksum(payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(payload);
    hasher.finalize()
}

/// Encode `state` into a record
pub fn encode(state: &PersistentState) -> [u8; RECORD_SIZE] {
    let payload: [u8; PAYLOAD_SIZE] = [
        MAGIC[0],
        MAGIC[1],
        VERSION,
        state.brightness,
        state.red,
        state.green,
        state.blue,
        state.active_channel.as_raw(),
    ];
    let crc = checksum(&payload).to_le_bytes();

    let mut record = [0u8; RECORD_SIZE];
    record[..PAYLOAD_SIZE].copy_from_slice(&payload);
    record[PAYLOAD_SIZE..].copy_from_slice(&crc);
    record
}

/// Decode a record, verifying magic, version and checksum
pub fn decode(record: &[u8; RECORD_SIZE]) -> Result<PersistentState, DecodeError> {
    let [m0, m1, version, brightness, red, green, blue, channel, c0, c1, c2, c3] = *record;

    if [m0, m1] != MAGIC {
        return Err(DecodeError::BadMagic);
    }
    if version != VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }
    if u32::from_le_bytes([c0, c1, c2, c3]) != checksum(&record[..PAYLOAD_SIZE]) {
        return Err(DecodeError::ChecksumMismatch);
    }
    let active_channel =
        ColorChannel::from_raw(channel).ok_or(DecodeError::InvalidChannel(channel))?;

    Ok(PersistentState {
        brightness,
        red,
        green,
        blue,
        active_channel,
    })
}

/// Read the state stored at `address`
///
/// Falls back to [`PersistentState::DEFAULT`] if the record is missing or
/// damaged.
pub fn load<S: StateStorage>(storage: &mut S, address: u32) -> PersistentState {
    let mut record = [0u8; RECORD_SIZE];
    storage.read(address, &mut record);
    match decode(&record) {
        Ok(state) => {
            diag!("loaded state: {}", state);
            state
        }
        Err(err) => {
            diag!("stored state rejected ({}), using defaults", err);
            PersistentState::DEFAULT
        }
    }
}

/// Write `state` to `address`
pub fn store<S: StateStorage>(storage: &mut S, address: u32, state: &PersistentState) {
    storage.write(address, &encode(state));
    diag!("saved state: {}", state);
}
