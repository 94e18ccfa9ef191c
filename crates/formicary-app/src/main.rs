use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use formicary_core::{Colony, ColonyConfig};

const FRAME: Duration = Duration::from_micros(16_667);

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

struct Options {
    config: Option<PathBuf>,
    seconds: f64,
    snapshot: Option<PathBuf>,
}

impl Options {
    fn from_env() -> Result<Self> {
        let seconds = match std::env::var("FORMICARY_SECONDS") {
            Ok(value) => value.parse::<f64>()?,
            Err(_) => 30.0,
        };
        Ok(Self {
            config: std::env::var_os("FORMICARY_CONFIG").map(PathBuf::from),
            seconds,
            snapshot: std::env::var_os("FORMICARY_SNAPSHOT").map(PathBuf::from),
        })
    }
}

fn main() -> ExitCode {
    // Init logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!("Formicary starting");
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Formicary error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let options = Options::from_env()?;
    let config = match &options.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            ColonyConfig::load(path)?
        }
        None => ColonyConfig::default(),
    };
    let mut colony = Colony::from_config(config)?;
    info!(
        ants = colony.ants().len(),
        snacks = colony.snacks().len(),
        snack_target = colony.config().snack_target,
        "colony ready; running for {}s",
        options.seconds
    );

    let mut last_frame = Instant::now();
    let mut next_report = 1.0;
    while colony.elapsed() < options.seconds {
        std::thread::sleep(FRAME.saturating_sub(last_frame.elapsed()));
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        colony.advance(dt)?;
        if colony.elapsed() >= next_report {
            next_report += 1.0;
            report(&colony);
        }
    }

    if let Some(path) = &options.snapshot {
        std::fs::write(path, colony.snapshot().to_json()?)?;
        info!("snapshot written to {}", path.display());
    }
    info!(delivered = colony.delivered(), "Formicary finished");
    Ok(())
}

fn report<R: formicary_core::RandomSource>(colony: &Colony<R>) {
    let carrying = colony.snapshot().carrying();
    info!(
        elapsed = colony.elapsed(),
        fps = colony.fps().round(),
        carrying,
        snacks = colony.snacks().len(),
        trails = colony.trails().len(),
        delivered = colony.delivered(),
        "status"
    );
}
