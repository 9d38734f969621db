use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    /// Caller-supplied data was rejected before any rendering happened.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("render backend failure: {0}")]
    Backend(String),
}
