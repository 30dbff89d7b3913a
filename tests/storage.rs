mod common;

mod tests {
    use strip_dial::storage::{self, DecodeError, decode, encode};
    use strip_dial::{ColorChannel, PersistentState, RECORD_SIZE, StateStorage};

    use crate::common::MemoryStorage;

    const SAMPLE: PersistentState = PersistentState {
        brightness: 42,
        red: 1,
        green: 2,
        blue: 250,
        active_channel: ColorChannel::Blue,
    };

    fn reseal(record: &mut [u8; RECORD_SIZE]) {
        let crc = crc32fast::hash(&record[..8]).to_le_bytes();
        record[8..].copy_from_slice(&crc);
    }

    #[test]
    fn test_encode_layout() {
        let record = encode(&PersistentState::DEFAULT);
        assert_eq!(&record[..8], &[b'S', b'D', 1, 100, 200, 100, 70, 0]);
        assert_eq!(
            u32::from_le_bytes([record[8], record[9], record[10], record[11]]),
            crc32fast::hash(&record[..8])
        );
    }

    #[test]
    fn test_decode_restores_state() {
        assert_eq!(decode(&encode(&SAMPLE)), Ok(SAMPLE));
    }

    #[test]
    fn test_decode_rejects_erased_flash() {
        assert_eq!(decode(&[0xFF; RECORD_SIZE]), Err(DecodeError::BadMagic));
        assert_eq!(decode(&[0x00; RECORD_SIZE]), Err(DecodeError::BadMagic));
    }

    #[test]
    fn test_decode_rejects_other_version() {
        let mut record = encode(&SAMPLE);
        record[2] = 2;
        reseal(&mut record);
        assert_eq!(decode(&record), Err(DecodeError::UnsupportedVersion(2)));
    }

    #[test]
    fn test_decode_rejects_corrupted_payload() {
        let mut record = encode(&SAMPLE);
        record[3] ^= 0x01;
        assert_eq!(decode(&record), Err(DecodeError::ChecksumMismatch));

        let mut record = encode(&SAMPLE);
        record[11] ^= 0x80;
        assert_eq!(decode(&record), Err(DecodeError::ChecksumMismatch));
    }

    #[test]
    fn test_decode_rejects_invalid_channel() {
        let mut record = encode(&SAMPLE);
        record[7] = 7;
        reseal(&mut record);
        assert_eq!(decode(&record), Err(DecodeError::InvalidChannel(7)));
    }

    #[test]
    fn test_load_falls_back_to_default() {
        let mut flash = MemoryStorage::erased();
        assert_eq!(storage::load(&mut flash, 0), PersistentState::DEFAULT);
        assert_eq!(flash.reads, 1);
        assert_eq!(flash.writes, 0);
    }

    #[test]
    fn test_store_then_load_at_address() {
        let mut flash = MemoryStorage::erased();
        storage::store(&mut flash, 12, &SAMPLE);
        assert_eq!(flash.writes, 1);
        assert_eq!(flash.record(12), encode(&SAMPLE));
        assert_eq!(flash.record(0), [0xFF; RECORD_SIZE]);

        assert_eq!(storage::load(&mut flash, 12), SAMPLE);
        assert_eq!(storage::load(&mut flash, 0), PersistentState::DEFAULT);
    }

    #[test]
    fn test_load_rejects_torn_write() {
        let mut flash = MemoryStorage::erased();
        let mut record = encode(&SAMPLE);
        record[6..].fill(0xFF);
        flash.write(0, &record);
        assert_eq!(storage::load(&mut flash, 0), PersistentState::DEFAULT);
    }

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::UnsupportedVersion(3).to_string(),
            "unsupported version 3"
        );
        assert_eq!(DecodeError::ChecksumMismatch.to_string(), "checksum mismatch");
    }
}
