use crate::error::{SeqForgeError, SfResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Size of the universe in the reference problem (items `0..100`).
pub const DEFAULT_UNIVERSE_SIZE: usize = 100;
/// Largest position distance at which a pair still contributes.
pub const DEFAULT_WINDOW: usize = 3;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, default_value_t = DEFAULT_UNIVERSE_SIZE)]
    pub universe_size: usize,
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    // Greedy restarts on the rayon pool
    #[arg(long = "sequential", action = clap::ArgAction::SetFalse)]
    pub parallel: bool,

    #[arg(long)]
    pub max_sweeps: Option<usize>,

    // Scores are multiples of 1/6, so anything below this is rounding noise.
    #[arg(long, default_value_t = 1e-9)]
    pub min_improvement: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            universe_size: DEFAULT_UNIVERSE_SIZE,
            window: DEFAULT_WINDOW,
            parallel: true,
            max_sweeps: None,
            min_improvement: 1e-9,
        }
    }
}

impl SearchParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let content = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    /// Overlays only the flags the user actually typed, so file values survive clap defaults.
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(universe_size, "universe_size");
        update_if_present!(window, "window");
        update_if_present!(parallel, "parallel");
        update_if_present!(max_sweeps, "max_sweeps");
        update_if_present!(min_improvement, "min_improvement");
    }

    pub fn validate(&self) -> SfResult<()> {
        if self.universe_size == 0 {
            return Err(SeqForgeError::Config(
                "universe_size must be at least 1".to_string(),
            ));
        }
        if self.window == 0 {
            return Err(SeqForgeError::Config(
                "window must be at least 1".to_string(),
            ));
        }
        if self.min_improvement.is_nan() || self.min_improvement < 0.0 {
            return Err(SeqForgeError::Config(format!(
                "min_improvement must be non-negative, got {}",
                self.min_improvement
            )));
        }
        Ok(())
    }
}
