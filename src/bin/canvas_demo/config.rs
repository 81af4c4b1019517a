//! Configuration for the canvas demo
//!
//! Precedence: CLI args > environment variables > config file > defaults.
//! When `fit_terminal` is set, the terminal size replaces the file/default
//! dimensions before environment and CLI overrides are applied.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use textcanvas::Dimensions;

/// Upper bound on the demo canvas, in cells
const MAX_CELLS: usize = 1 << 20;

/// CLI arguments for the canvas demo
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "canvas-demo")]
#[command(version)]
#[command(about = "Walk through the textcanvas API", long_about = None)]
pub struct CliArgs {
    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Width of the main canvas
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Height of the main canvas
    #[arg(long, value_name = "ROWS")]
    pub height: Option<usize>,

    /// Background character
    #[arg(short, long, value_name = "CHAR")]
    pub fill: Option<char>,

    /// Size the main canvas to the attached terminal
    #[arg(long)]
    pub fit_terminal: bool,
}

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Main canvas width
    #[serde(default = "default_width")]
    pub width: usize,

    /// Main canvas height
    #[serde(default = "default_height")]
    pub height: usize,

    /// Background character
    #[serde(default = "default_fill")]
    pub fill: char,

    /// Use the terminal size instead of `width`/`height`
    #[serde(default)]
    pub fit_terminal: bool,

    /// Long text written across the canvas to show cursor wrapping
    #[serde(default = "default_message")]
    pub message: String,
}

fn default_width() -> usize {
    50
}
fn default_height() -> usize {
    20
}
fn default_fill() -> char {
    'x'
}
fn default_message() -> String {
    "The cursor wraps at the end of every row and stops at the last cell, \
     so long text never runs past the edge of the canvas."
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            fill: default_fill(),
            fit_terminal: false,
            message: default_message(),
        }
    }
}

/// Configuration error
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub message: String,
    pub field: Option<String>,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "Config error in '{}': {}", field, self.message)
        } else {
            write!(f, "Config error: {}", self.message)
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration with full precedence from the process environment
    pub fn load_with_args(args: &CliArgs) -> Result<Self, ConfigError> {
        Self::resolve(
            args,
            |key| env::var(key).ok(),
            textcanvas::term::terminal_size_or_default,
        )
    }

    /// Build the configuration from explicit sources
    fn resolve(
        args: &CliArgs,
        env_var: impl Fn(&str) -> Option<String>,
        terminal_size: impl FnOnce() -> Dimensions,
    ) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load_from_file(path)?,
            None => Config::default(),
        };

        if config.fit_terminal || args.fit_terminal {
            let dims = terminal_size();
            tracing::debug!("fitting canvas to terminal: {}", dims);
            config.width = dims.width;
            config.height = dims.height;
        }

        config.apply_env_vars(env_var);
        config.apply_cli_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
            field: None,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError {
            message: format!("Failed to parse config file: {}", e),
            field: None,
        })
    }

    /// Apply environment variables to config
    fn apply_env_vars(&mut self, env_var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = env_var("TEXTCANVAS_WIDTH") {
            match val.parse() {
                Ok(width) => self.width = width,
                Err(_) => tracing::warn!("ignoring TEXTCANVAS_WIDTH={:?}", val),
            }
        }
        if let Some(val) = env_var("TEXTCANVAS_HEIGHT") {
            match val.parse() {
                Ok(height) => self.height = height,
                Err(_) => tracing::warn!("ignoring TEXTCANVAS_HEIGHT={:?}", val),
            }
        }
        if let Some(val) = env_var("TEXTCANVAS_FILL") {
            let mut chars = val.chars();
            match (chars.next(), chars.next()) {
                (Some(fill), None) => self.fill = fill,
                _ => tracing::warn!("ignoring TEXTCANVAS_FILL={:?}", val),
            }
        }
    }

    /// Apply CLI arguments to config
    fn apply_cli_args(&mut self, args: &CliArgs) {
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if let Some(fill) = args.fill {
            self.fill = fill;
        }
        if args.fit_terminal {
            self.fit_terminal = true;
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError {
                message: format!("Canvas must not be empty, got {}x{}", self.width, self.height),
                field: Some("dimensions".to_string()),
            });
        }
        if self.width.saturating_mul(self.height) > MAX_CELLS {
            return Err(ConfigError {
                message: format!("Canvas must have at most {} cells", MAX_CELLS),
                field: Some("dimensions".to_string()),
            });
        }
        if self.fill.is_control() {
            return Err(ConfigError {
                message: format!("Fill must be a printable character, got {:?}", self.fill),
                field: Some("fill".to_string()),
            });
        }
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}
