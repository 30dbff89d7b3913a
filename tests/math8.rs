mod tests {
    use embassy_time::Duration;
    use strip_dial::math8::{lerp_by_time, rescale};

    #[test]
    fn test_lerp_by_time() {
        let total = Duration::from_millis(100);
        assert_eq!(lerp_by_time(0, 255, Duration::from_millis(0), total), 0);
        assert_eq!(lerp_by_time(0, 255, Duration::from_millis(50), total), 127);
        assert_eq!(lerp_by_time(0, 255, Duration::from_millis(100), total), 255);
        assert_eq!(lerp_by_time(200, 100, Duration::from_millis(25), total), 175);
        assert_eq!(lerp_by_time(200, 100, Duration::from_millis(500), total), 100);
    }

    #[test]
    fn test_lerp_by_time_zero_duration() {
        let zero = Duration::from_millis(0);
        assert_eq!(lerp_by_time(10, 90, zero, zero), 90);
    }

    #[test]
    fn test_rescale() {
        assert_eq!(rescale(0, 900, 255), 0);
        assert_eq!(rescale(450, 900, 255), 127);
        assert_eq!(rescale(900, 900, 255), 255);
        assert_eq!(rescale(1023, 900, 255), 255);
        assert_eq!(rescale(5, 0, 255), 0);
    }
}
