use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Reference temperature used when the run does not configure one, treated
/// as the theoretical minimum outlet temperature.
pub const DEFAULT_AMBIENT_TEMP_C: f64 = 25.0;

/// Dataset location used when neither the config file nor the CLI names one.
pub const DEFAULT_DATASET: &str = "data/experimental_results.csv";

/// Run configuration, optionally loaded from a YAML file. Command-line
/// flags override anything set here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub ambient_temp_c: f64,
    pub dataset: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ambient_temp_c: DEFAULT_AMBIENT_TEMP_C,
            dataset: PathBuf::from(DEFAULT_DATASET),
            output_dir: PathBuf::from("."),
        }
    }
}

impl RunConfig {
    /// Loads a run configuration from a YAML file. Missing keys fall back
    /// to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the configured values.
    pub fn with_overrides(
        mut self,
        dataset: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        ambient_temp_c: Option<f64>,
    ) -> Self {
        if let Some(dataset) = dataset {
            self.dataset = dataset;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        if let Some(ambient) = ambient_temp_c {
            self.ambient_temp_c = ambient;
        }
        self
    }
}
