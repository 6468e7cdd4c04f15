use std::sync::OnceLock;

use clap::Parser;
use thiserror::Error;

/// Errors raised while validating startup configuration.
/// These abort the run before the loop ever starts.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fps must be a positive integer, got {0}")]
    InvalidFps(u32),
    #[error("window dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("cell size must be positive and fit the window, got {0}")]
    InvalidCellSize(u32),
    #[error("alive probability must be within [0, 1], got {0}")]
    InvalidAliveProbability(f64),
}

#[derive(Parser, Debug)]
#[command(name = "lifesim")]
#[command(about = "Conway's Game of Life in a fixed-rate render loop")]
struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Target frames (and generations) per second
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Edge length of one cell in pixels
    #[arg(long, default_value_t = 10)]
    cell_size: u32,

    /// Draw live cells in random palette colors instead of white
    #[arg(long)]
    colors: bool,

    /// Probability that a cell starts alive
    #[arg(long, default_value_t = 0.1)]
    alive_probability: f64,

    /// Seed for the random number generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

/// Validated startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub cell_size: u32,
    pub colors: bool,
    pub alive_probability: f64,
    pub seed: Option<u64>,
}

impl Config {
    fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.width == 0 || cli.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: cli.width,
                height: cli.height,
            });
        }
        if cli.fps == 0 {
            return Err(ConfigError::InvalidFps(cli.fps));
        }
        if cli.cell_size == 0 || cli.cell_size > cli.width || cli.cell_size > cli.height {
            return Err(ConfigError::InvalidCellSize(cli.cell_size));
        }
        if !(0.0..=1.0).contains(&cli.alive_probability) {
            return Err(ConfigError::InvalidAliveProbability(cli.alive_probability));
        }

        Ok(Self {
            width: cli.width,
            height: cli.height,
            fps: cli.fps,
            cell_size: cli.cell_size,
            colors: cli.colors,
            alive_probability: cli.alive_probability,
            seed: cli.seed,
        })
    }

    /// Grid dimensions as (columns, rows), sized to exactly cover the
    /// visible window. Partial cells at the right/bottom edge are dropped.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (
            (self.width / self.cell_size) as usize,
            (self.height / self.cell_size) as usize,
        )
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parse and validate configuration from the command line, once per process.
/// Invalid input prints a descriptive message and exits non-zero.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let cli = Cli::parse();
        match Config::from_cli(cli) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(2);
            }
        }
    })
}
