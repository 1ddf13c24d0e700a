mod tests {
    use glowstrip::{Duration, Mode};

    #[test]
    fn test_mode_names_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::parse_from_str(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_mode_parse_wire_names() {
        assert_eq!(Mode::parse_from_str("color_wipe"), Some(Mode::ColorWipe));
        assert_eq!(
            Mode::parse_from_str("theater_chase"),
            Some(Mode::TheaterChase)
        );
        assert_eq!(Mode::parse_from_str("strobe"), None);
        assert_eq!(Mode::parse_from_str("Solid"), None);
        assert_eq!(Mode::parse_from_str(""), None);
    }

    #[test]
    fn test_mode_frame_intervals() {
        assert_eq!(Mode::Off.frame_interval(), Duration::from_ticks(0));
        assert_eq!(Mode::Solid.frame_interval(), Duration::from_ticks(0));
        assert_eq!(Mode::Rainbow.frame_interval(), Duration::from_millis(20));
        assert_eq!(Mode::ColorWipe.frame_interval(), Duration::from_millis(50));
        assert_eq!(
            Mode::TheaterChase.frame_interval(),
            Duration::from_millis(100)
        );
        assert_eq!(Mode::Pulse.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_mode_next_cursor() {
        assert_eq!(Mode::Rainbow.next_cursor(0, 50), 1);
        assert_eq!(Mode::Rainbow.next_cursor(255, 50), 0);
        assert_eq!(Mode::ColorWipe.next_cursor(49, 50), 50);
        assert_eq!(Mode::ColorWipe.next_cursor(50, 50), 0);
        assert_eq!(Mode::TheaterChase.next_cursor(2, 50), 0);
        assert_eq!(Mode::Solid.next_cursor(7, 50), 7);
        assert_eq!(Mode::Pulse.next_cursor(0, 50), 0);
    }

    #[test]
    fn test_mode_next_cursor_near_u32_max() {
        assert_eq!(Mode::Rainbow.next_cursor(u32::MAX, 50), 0);
        assert_eq!(Mode::TheaterChase.next_cursor(u32::MAX, 50), 1);
        assert_eq!(Mode::ColorWipe.next_cursor(u32::MAX, 50), 0);
        assert_eq!(Mode::ColorWipe.next_cursor(u32::MAX - 1, u32::MAX), u32::MAX);
        assert_eq!(Mode::ColorWipe.next_cursor(u32::MAX, u32::MAX), 0);
    }

    #[test]
    fn test_mode_cycle() {
        let mut mode = Mode::Off;
        let mut visited = Vec::new();
        for _ in 0..6 {
            mode = mode.next_in_cycle();
            visited.push(mode);
        }
        assert_eq!(
            visited,
            [
                Mode::Solid,
                Mode::Rainbow,
                Mode::ColorWipe,
                Mode::TheaterChase,
                Mode::Pulse,
                Mode::Solid,
            ]
        );
    }
}
