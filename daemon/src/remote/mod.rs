//! Wireless remote adapter
//!
//! Reads Blue Dot messages from a line-oriented device, such as an RFCOMM
//! tty bound to the paired phone, and dispatches the decoded gestures.

mod bluedot;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
    time::Instant,
};

use glowstrip::{AnimationStore, FrameSink, dispatch};

use self::bluedot::Decoder;
use crate::driver::MAX_LEDS;

/// Start the remote reader thread.
///
/// Returns `None` when the device can not be opened, the daemon then runs
/// without remote control.
pub fn spawn<F>(
    device: &Path,
    store: Arc<AnimationStore<F, MAX_LEDS>>,
    stop: Arc<AtomicBool>,
) -> Option<JoinHandle<()>>
where
    F: FrameSink + Send + 'static,
{
    let file = match File::open(device) {
        Ok(file) => file,
        Err(err) => {
            log::warn!(
                "Remote device {} is unavailable, remote control disabled: {}",
                device.display(),
                err
            );
            return None;
        }
    };
    log::info!("Listening for remote on {}", device.display());

    let spawned = thread::Builder::new()
        .name("remote".to_owned())
        .spawn(move || run(BufReader::new(file), &store, &stop));
    match spawned {
        Ok(handle) => Some(handle),
        Err(err) => {
            log::warn!("Unable to start remote thread: {err}");
            None
        }
    }
}

/// Decode and dispatch messages until the stream ends or `stop` is set.
pub fn run<R: BufRead, F: FrameSink>(
    reader: R,
    store: &AnimationStore<F, MAX_LEDS>,
    stop: &AtomicBool,
) {
    let mut decoder = Decoder::new();
    for line in reader.lines() {
        if stop.load(Ordering::Relaxed) {
            break;
        }

        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("Remote read failed: {err}");
                break;
            }
        };
        match decoder.decode(&line, Instant::now()) {
            Ok(events) => {
                for event in events {
                    log::debug!("Remote event: {event:?}");
                    dispatch(store, event);
                }
            }
            Err(err) => log::warn!("Skipping remote message {line:?}: {err}"),
        }
    }
    log::info!("Remote disconnected");
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use glowstrip::{AnimationConfig, Mode, color::color_from_angle};

    use super::*;
    use crate::{config::StripConfig, driver::Strip};

    fn store() -> AnimationStore<Strip, MAX_LEDS> {
        AnimationStore::new(Strip::dry_run(&StripConfig::default()), &AnimationConfig::default())
    }

    #[test]
    fn test_press_toggles_strip() {
        let store = store();
        run(Cursor::new("1,0,0\n0,0,0\n"), &store, &AtomicBool::new(false));
        assert_eq!(store.snapshot().mode, Mode::Solid);
    }

    #[test]
    fn test_move_sets_color() {
        let store = store();
        store.set_mode(Mode::Rainbow);

        run(Cursor::new("garbage\n2,0.5,1\n"), &store, &AtomicBool::new(false));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.mode, Mode::Solid);
        assert_eq!(snapshot.color, color_from_angle(26.57));
    }

    #[test]
    fn test_stop_flag_ends_reader() {
        let store = store();
        run(Cursor::new("1,0,0\n"), &store, &AtomicBool::new(true));
        assert_eq!(store.snapshot().mode, Mode::Off);
    }

    #[test]
    fn test_missing_device_disables_remote() {
        let handle = spawn(
            Path::new("/nonexistent/glowstrip-remote"),
            Arc::new(store()),
            Arc::new(AtomicBool::new(false)),
        );
        assert!(handle.is_none());
    }
}
