use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mousesmack_app::autoplay::{self, BotSettings};
use mousesmack_app::display::game_over_text;
use mousesmack_core::config::RoundConfig;

/// Play a headless MOUSESMACK round with the autoplay bot.
#[derive(Debug, Parser)]
#[command(name = "mousesmack", version)]
struct Cli {
    /// Round config JSON. Missing fields use the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the round RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the round length in seconds.
    #[arg(long)]
    starting_time: Option<f64>,

    /// Probability that the bot aims off target.
    #[arg(long, default_value_t = 0.2)]
    miss_chance: f64,

    /// Milliseconds between bot taps at 1x speed.
    #[arg(long, default_value_t = 250)]
    reaction_ms: u64,

    /// Wall-clock speed-up of the game loop.
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Print the final snapshot as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RoundConfig::load(path)
            .with_context(|| format!("loading round config from {}", path.display()))?,
        None => RoundConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(secs) = cli.starting_time {
        config.starting_time_secs = secs;
    }
    config.validate().context("invalid round config")?;

    let settings = BotSettings {
        miss_chance: cli.miss_chance,
        reaction: Duration::from_millis(cli.reaction_ms),
        seed: config.seed.wrapping_add(1),
    };
    tracing::info!(
        seed = config.seed,
        starting_time_secs = config.starting_time_secs,
        miss_chance = settings.miss_chance,
        "starting autoplay round"
    );

    let snapshot = autoplay::run(config, settings, cli.speed)?;
    let final_score = snapshot.final_score.unwrap_or(snapshot.score);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", game_over_text(final_score));
    }
    Ok(())
}
