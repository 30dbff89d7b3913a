mod tests {
    use embassy_time::{Duration, Instant};
    use strip_dial::transition::ValueTransition;

    #[test]
    fn test_value_transition_level() {
        let mut transition = ValueTransition::new_level(0);
        assert_eq!(transition.current(), 0);
        assert!(!transition.is_transitioning());
        transition.set(100, Duration::from_millis(100), Instant::from_millis(0));
        assert!(transition.is_transitioning());
        assert_eq!(transition.target(), 100);

        assert!(!transition.tick(Instant::from_millis(50)));
        assert_eq!(transition.current(), 50);

        assert!(transition.tick(Instant::from_millis(100)));
        assert_eq!(transition.current(), 100);
        assert!(!transition.is_transitioning());
        assert!(!transition.tick(Instant::from_millis(150)));
    }

    #[test]
    fn test_value_transition_immediate() {
        let mut transition = ValueTransition::new_level(30);
        transition.set(80, Duration::from_millis(0), Instant::from_millis(10));
        assert_eq!(transition.current(), 80);
        assert!(!transition.is_transitioning());
    }

    #[test]
    fn test_value_transition_retarget_starts_from_current() {
        let mut transition = ValueTransition::new_level(0);
        transition.set(200, Duration::from_millis(200), Instant::from_millis(0));
        transition.tick(Instant::from_millis(100));
        assert_eq!(transition.current(), 100);

        transition.set(0, Duration::from_millis(100), Instant::from_millis(100));
        transition.tick(Instant::from_millis(150));
        assert_eq!(transition.current(), 50);
        assert!(transition.tick(Instant::from_millis(200)));
        assert_eq!(transition.current(), 0);
    }
}
