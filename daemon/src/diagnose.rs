//! Strip self-test
//!
//! Wipes red, green and blue across the strip, one pixel per color wipe
//! frame, then blanks it.

use std::{
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use glowstrip::{AnimationStore, FrameSink, Instant, Mode, RenderLoop, Rgb};

use crate::driver::MAX_LEDS;

const WIPE_COLORS: [(&str, Rgb); 3] = [
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
];

/// Run the self-test, returning early with a blank strip once `stop` is set.
pub fn run<F: FrameSink>(
    store: &AnimationStore<F, MAX_LEDS>,
    stop: &AtomicBool,
) -> Result<(), F::Error> {
    let pixel_count = store.pixel_count();
    let mut render_loop = RenderLoop::new(store);

    'colors: for (name, color) in WIPE_COLORS {
        log::info!("Wiping {name} across {pixel_count} pixels");
        store.set_color(color);
        store.set_mode(Mode::ColorWipe);

        while store.snapshot().cursor < pixel_count {
            if stop.load(Ordering::Relaxed) {
                log::info!("Self-test interrupted");
                break 'colors;
            }
            let tick = render_loop.tick(Instant::now())?;
            thread::sleep(std::time::Duration::from_micros(
                tick.sleep_duration.as_micros(),
            ));
        }
    }

    render_loop.shutdown(Instant::now())
}
