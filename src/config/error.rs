use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Chunk width must be greater than zero")]
    ZeroWidth,

    #[error("No input files given")]
    NoInputs,

    #[error("Output path is also an input: {}", .0.display())]
    OutputIsInput(PathBuf),
}
