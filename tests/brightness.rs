mod tests {
    use strip_dial::brightness::{BrightnessFilter, HISTORY_LEN, SampleRing, scale_sample};

    #[test]
    fn test_scale_sample_clamps_and_rescales() {
        assert_eq!(scale_sample(0), 0);
        assert_eq!(scale_sample(450), 127);
        assert_eq!(scale_sample(900), 255);
        assert_eq!(scale_sample(901), 255);
        assert_eq!(scale_sample(1023), 255);
    }

    #[test]
    fn test_ring_mean_truncates() {
        let mut ring = SampleRing::<5>::new();
        assert!(ring.is_empty());
        assert_eq!(ring.mean(), 0);

        ring.push(1);
        ring.push(2);
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.mean(), 1);

        ring.push(10);
        ring.push(20);
        assert_eq!(ring.mean(), 8);
    }

    #[test]
    fn test_ring_evicts_oldest() {
        let mut ring = SampleRing::<3>::filled(90);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.mean(), 90);

        ring.push(0);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.mean(), 60);
        ring.push(0);
        ring.push(0);
        assert_eq!(ring.mean(), 0);
    }

    #[test]
    fn test_filter_starts_from_initial_level() {
        let mut filter = BrightnessFilter::new(100);
        assert_eq!(filter.value(), 100);

        // One full-scale sample among four 100s: (400 + 255) / 5
        assert_eq!(filter.update(900), 131);
        for _ in 1..HISTORY_LEN {
            filter.update(900);
        }
        assert_eq!(filter.value(), 255);
    }

    #[test]
    fn test_filter_saturates_on_out_of_range_samples() {
        let mut filter = BrightnessFilter::new(0);
        for _ in 0..HISTORY_LEN {
            filter.update(u16::MAX);
        }
        assert_eq!(filter.value(), 255);

        for _ in 0..HISTORY_LEN {
            filter.update(0);
        }
        assert_eq!(filter.value(), 0);
    }

    #[test]
    fn test_filter_monotonic_once_warm() {
        let mut previous = 0;
        for raw in 0..=900u16 {
            let mut filter = BrightnessFilter::new(0);
            let mut level = 0;
            for _ in 0..HISTORY_LEN {
                level = filter.update(raw);
            }
            assert_eq!(level, scale_sample(raw));
            assert!(level >= previous, "raw {raw}: {level} < {previous}");
            previous = level;
        }
    }
}
