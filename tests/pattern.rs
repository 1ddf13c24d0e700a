mod tests {
    use glowstrip::{
        Instant, Mode, Rgb,
        color::wheel,
        pattern::{
            pulse_brightness, render, render_color_wipe, render_rainbow, render_theater_chase,
        },
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_rainbow_spreads_wheel_over_strip() {
        let mut leds = [BLACK; 4];
        render_rainbow(0, &mut leds);
        assert_eq!(leds, [wheel(0), wheel(64), wheel(128), wheel(192)]);

        render_rainbow(10, &mut leds);
        assert_eq!(leds, [wheel(10), wheel(74), wheel(138), wheel(202)]);
    }

    #[test]
    fn test_rainbow_is_periodic() {
        let mut a = [BLACK; 50];
        let mut b = [BLACK; 50];
        for cursor in [0, 1, 100, 255, 1000] {
            render_rainbow(cursor, &mut a);
            render_rainbow(cursor + 256, &mut b);
            assert_eq!(a, b, "cursor {cursor}");
        }
    }

    #[test]
    fn test_rainbow_accepts_any_cursor() {
        let mut leds = [BLACK; 4];
        render_rainbow(u32::MAX, &mut leds);
        assert_eq!(leds, [wheel(255), wheel(63), wheel(127), wheel(191)]);
    }

    #[test]
    fn test_rainbow_ignores_empty_strip() {
        let mut leds: [Rgb; 0] = [];
        render_rainbow(3, &mut leds);
    }

    #[test]
    fn test_color_wipe() {
        let mut leds = [RED; 5];
        render_color_wipe(0, RED, &mut leds);
        assert_eq!(leds, [BLACK; 5]);

        render_color_wipe(2, RED, &mut leds);
        assert_eq!(leds, [RED, RED, BLACK, BLACK, BLACK]);

        render_color_wipe(5, RED, &mut leds);
        assert_eq!(leds, [RED; 5]);
    }

    #[test]
    fn test_theater_chase_phases() {
        let mut leds = [BLACK; 7];
        render_theater_chase(0, RED, &mut leds);
        assert_eq!(leds, [RED, BLACK, BLACK, RED, BLACK, BLACK, RED]);

        render_theater_chase(1, RED, &mut leds);
        assert_eq!(leds, [BLACK, RED, BLACK, BLACK, RED, BLACK, BLACK]);

        render_theater_chase(2, RED, &mut leds);
        assert_eq!(leds, [BLACK, BLACK, RED, BLACK, BLACK, RED, BLACK]);
    }

    #[test]
    fn test_render_dispatch() {
        let mut leds = [RED; 3];
        render(Mode::Off, 0, RED, &mut leds);
        assert_eq!(leds, [BLACK; 3]);

        render(Mode::Solid, 0, RED, &mut leds);
        assert_eq!(leds, [RED; 3]);

        render(Mode::Off, 0, RED, &mut leds);
        render(Mode::Pulse, 0, RED, &mut leds);
        assert_eq!(leds, [RED; 3]);
    }

    #[test]
    fn test_pulse_brightness() {
        assert_eq!(pulse_brightness(Instant::from_millis(0)), 127);
        // sin(2t) peaks at t = pi / 4
        assert!(pulse_brightness(Instant::from_micros(785_398)) >= 254);
        // and bottoms out at t = 3 * pi / 4
        assert!(pulse_brightness(Instant::from_micros(2_356_194)) <= 1);
    }
}
