mod common;

mod tests {
    use glowstrip::{Duration, LoopState, Mode, POLL_INTERVAL, RenderLoop};

    use crate::common::{BLACK, RED, at, last_frame, presented_count, store_with_pixels};

    #[test]
    fn test_tick_advances_and_requests_poll_sleep() {
        let store = store_with_pixels(5);
        store.set_mode(Mode::Solid);
        let mut render_loop = RenderLoop::new(&store);

        let result = render_loop.tick(at(0)).unwrap();
        assert!(result.presented);
        assert_eq!(result.sleep_duration, POLL_INTERVAL);
        assert_eq!(POLL_INTERVAL, Duration::from_millis(10));
        assert_eq!(last_frame(&store).pixels, vec![RED; 5]);
    }

    #[test]
    fn test_tick_polls_faster_than_animation() {
        let store = store_with_pixels(5);
        store.set_mode(Mode::TheaterChase);
        let mut render_loop = RenderLoop::new(&store);

        let presented = (0..20)
            .map(|i| render_loop.tick(at(i * 10)).unwrap().presented)
            .filter(|presented| *presented)
            .count();
        // frames at 0 and 100 ms only
        assert_eq!(presented, 2);
        assert_eq!(store.snapshot().cursor, 2);
    }

    #[test]
    fn test_custom_poll_interval() {
        let store = store_with_pixels(5);
        let mut render_loop = RenderLoop::with_poll_interval(&store, Duration::from_millis(25));
        assert_eq!(
            render_loop.tick(at(0)).unwrap().sleep_duration,
            Duration::from_millis(25)
        );
    }

    #[test]
    fn test_shutdown_blanks_strip() {
        let store = store_with_pixels(5);
        store.set_mode(Mode::Pulse);
        let mut render_loop = RenderLoop::new(&store);
        render_loop.tick(at(0)).unwrap();

        render_loop.shutdown(at(5)).unwrap();
        assert_eq!(render_loop.state(), LoopState::ShuttingDown);
        assert!(!render_loop.is_running());
        assert_eq!(store.snapshot().mode, Mode::Off);
        let frame = last_frame(&store);
        assert_eq!(frame.pixels, vec![BLACK; 5]);
        assert_eq!(frame.brightness, 255);
    }

    #[test]
    fn test_shutdown_is_terminal() {
        let store = store_with_pixels(5);
        store.set_mode(Mode::Solid);
        let mut render_loop = RenderLoop::new(&store);
        render_loop.shutdown(at(0)).unwrap();
        let presented = presented_count(&store);

        render_loop.shutdown(at(10)).unwrap();
        store.set_mode(Mode::Solid);
        let result = render_loop.tick(at(20)).unwrap();
        assert!(!result.presented);
        assert_eq!(result.sleep_duration, Duration::from_ticks(0));
        assert_eq!(presented_count(&store), presented);
        assert_eq!(render_loop.state(), LoopState::ShuttingDown);
    }
}
