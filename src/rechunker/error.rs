use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RechunkError {
    #[error("Chunk width must be greater than zero")]
    ZeroWidth,

    #[error("Window mode needs at least one input record")]
    EmptyStream,

    #[error("Chunk width {width} exceeds input record width {record_width}")]
    WidthExceedsRecord { width: usize, record_width: usize },
}
