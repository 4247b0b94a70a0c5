use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wall_snake::game::GameConfig;
use wall_snake::modes::{HeadlessMode, HumanMode};

#[derive(Parser)]
#[command(name = "wall_snake")]
#[command(version, about = "Snake on a grid with walls sliding across it")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON file with a game configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width
    #[arg(long)]
    width: Option<usize>,

    /// Board height
    #[arg(long)]
    height: Option<usize>,

    /// Number of walls to keep on the board
    #[arg(long)]
    walls: Option<usize>,

    /// Number of apples to keep on the board
    #[arg(long)]
    apples: Option<usize>,

    /// Last round to play (zero or negative for no limit)
    #[arg(long, allow_hyphen_values = true)]
    rounds: Option<i64>,

    /// Freeze the snake to watch walls and apples alone
    #[arg(long)]
    debug: bool,

    /// Seed for wall and apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds per round in human mode
    #[arg(long)]
    round_millis: Option<u64>,

    /// Write logs to this file (human mode draws on stderr)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with keyboard controls
    Human,
    /// Run one game without a screen and log the result
    Headless,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(walls) = self.walls {
            config.wall_count = walls;
        }
        if let Some(apples) = self.apples {
            config.apple_count = apples;
        }
        if let Some(rounds) = self.rounds {
            config.max_rounds = rounds;
        }
        if self.debug {
            config.debug = true;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(round_millis) = self.round_millis {
            config.round_millis = round_millis;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_tracing(log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;
        }
        None if to_stderr => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;
        }
        None => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config()?;

    init_tracing(cli.log_file.as_deref(), matches!(cli.mode, Mode::Headless))?;
    info!(?config, "starting wall snake");

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
        Mode::Headless => {
            let summary = HeadlessMode::new(config).run()?;
            println!(
                "rounds: {}  score: {}  length: {}",
                summary.rounds, summary.score, summary.snake_length
            );
        }
    }

    Ok(())
}
