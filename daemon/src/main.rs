mod config;
mod diagnose;
mod driver;
mod http;
mod remote;

use std::{
    net::SocketAddr,
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use glowstrip::{AnimationConfig, AnimationStore, Duration, FrameSink, Instant, RenderLoop};

use crate::{
    config::{DEFAULT_CONFIG_PATH, StripConfig},
    driver::{DriverKind, MAX_LEDS, Store, Strip},
    http::{ControlRoutes, HttpServer},
};

/// LED strip animation daemon
///
/// Renders animations on a WS281x strip, controlled over HTTP and from a
/// Blue Dot wireless remote.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Strip configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: PathBuf,
    /// Address of the HTTP control surface
    #[arg(short, long, default_value = "0.0.0.0:5000")]
    listen: SocketAddr,
    /// Line-oriented Blue Dot remote device, for example `/dev/rfcomm0`
    #[arg(short, long, value_name = "DEVICE")]
    remote: Option<PathBuf>,
    /// Strip driver
    #[arg(short, long, value_enum, default_value_t = DriverKind::DEFAULT)]
    driver: DriverKind,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Run the animation daemon
    Run,
    /// Wipe red, green and blue across the strip, then turn it off
    Diagnose,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = StripConfig::load(&cli.config)?;
    let strip = Strip::open(cli.driver, &config).context("Could not initialize LEDs")?;
    let store = Arc::new(AnimationStore::new(
        strip,
        &AnimationConfig {
            brightness: config.brightness,
            ..AnimationConfig::default()
        },
    ));

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || {
            log::info!("Termination requested");
            stop.store(true, Ordering::Relaxed);
        })
        .context("Unable to install the termination handler")?;
    }

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run(&cli, &store, &stop),
        Command::Diagnose => diagnose::run(store.as_ref(), &stop).context("Self-test failed"),
    }
}

fn run(cli: &Cli, store: &Arc<Store>, stop: &Arc<AtomicBool>) -> anyhow::Result<()> {
    let server = HttpServer::bind(ControlRoutes::new(store.clone()), cli.listen)
        .with_context(|| format!("Unable to listen on {}", cli.listen))?;
    {
        let stop = stop.clone();
        thread::Builder::new()
            .name("http".to_owned())
            .spawn(move || server.listen_and_serve(&stop))
            .context("Unable to start the HTTP thread")?;
    }

    if let Some(device) = &cli.remote {
        remote::spawn(device, store.clone(), stop.clone());
    }

    // Detached adapter threads end with the process.
    render(store.as_ref(), stop)
}

/// Drive the animation on the current thread until termination.
///
/// The strip is blanked on the way out, even after a failed frame. When both
/// fail, the frame error is returned and the blanking error logged.
fn render<F>(store: &AnimationStore<F, MAX_LEDS>, stop: &AtomicBool) -> anyhow::Result<()>
where
    F: FrameSink,
    F::Error: std::error::Error + Send + Sync + 'static,
{
    let mut render_loop = RenderLoop::new(store);
    let mut result = Ok(());
    while !stop.load(Ordering::Relaxed) {
        match render_loop.tick(Instant::now()) {
            Ok(tick) => sleep(tick.sleep_duration),
            Err(err) => {
                result = Err(err).context("Unable to present a frame");
                break;
            }
        }
    }

    let shutdown = render_loop
        .shutdown(Instant::now())
        .context("Unable to blank the strip");
    match (result, shutdown) {
        (Err(err), Err(shutdown_err)) => {
            log::error!("{shutdown_err:#}");
            Err(err)
        }
        (result, shutdown) => result.and(shutdown),
    }
}

fn sleep(duration: Duration) {
    thread::sleep(std::time::Duration::from_micros(duration.as_micros()));
}
