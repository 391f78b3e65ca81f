mod error;


pub use error::ConfigError;

use crate::rechunker::{FLAT_BUS_WIDTH, Mode, WINDOW_BUS_WIDTH};
use crate::sink::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Reference vectors written by the vector generator
pub const REF_VEC_FILE: &str = "ref_vec.txt";

/// Comparison vectors written by the vector generator
pub const CMP_VEC_FILE: &str = "cmp_vec.txt";

/// File included by the testbench
pub const TEST_VECTORS_FILE: &str = "test_vectors.dat";

/// Historical constant sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// 128-bit reference vectors on a 96-bit bus
    #[default]
    Window,
    /// Reference and comparison vectors merged onto a 512-bit bus
    Flat,
}

impl Preset {
    pub fn config(&self) -> JobConfig {
        match self {
            Preset::Window => JobConfig {
                mode: Mode::Window,
                width: WINDOW_BUS_WIDTH,
                inputs: vec![PathBuf::from(REF_VEC_FILE)],
                output: PathBuf::from(TEST_VECTORS_FILE),
                format: OutputFormat::Lines,
            },
            Preset::Flat => JobConfig {
                mode: Mode::Flat,
                width: FLAT_BUS_WIDTH,
                inputs: vec![PathBuf::from(REF_VEC_FILE), PathBuf::from(CMP_VEC_FILE)],
                output: PathBuf::from(TEST_VECTORS_FILE),
                format: OutputFormat::Lines,
            },
        }
    }
}

/// Fully resolved settings for one regeneration run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobConfig {
    pub mode: Mode,
    /// Beat width in symbols
    pub width: usize,
    /// Vector files, read in this order
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl Default for JobConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

impl JobConfig {
    /// Resolve settings from a preset and override layers applied in order
    ///
    /// The preset named by the last layer that sets one wins over `preset`.
    pub fn resolve(preset: Preset, layers: &[&JobOverrides]) -> Self {
        let preset = layers
            .iter()
            .rev()
            .find_map(|layer| layer.preset)
            .unwrap_or(preset);

        let mut config = preset.config();
        for layer in layers {
            layer.apply(&mut config);
        }
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }

        if self.inputs.is_empty() {
            return Err(ConfigError::NoInputs);
        }

        if self.inputs.iter().any(|input| same_path(input, &self.output)) {
            return Err(ConfigError::OutputIsInput(self.output.clone()));
        }

        Ok(())
    }
}

/// Partial settings from a JSON job file or the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobOverrides {
    pub preset: Option<Preset>,
    pub mode: Option<Mode>,
    pub width: Option<usize>,
    pub inputs: Option<Vec<PathBuf>>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl JobOverrides {
    pub fn from_json(path: &Path, json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    fn apply(&self, config: &mut JobConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(inputs) = &self.inputs {
            config.inputs = inputs.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
    }
}

/// Compare paths, resolving them on disk where possible
fn same_path(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
