use thiserror::Error;

/// Errors originating from the grid computer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid mode: {0:?} (expected \"sequential\" or \"parallel\")")]
    InvalidMode(String),

    #[error("invalid min block size: {0} (must be > 0)")]
    InvalidBlockSize(u32),

    #[error("grid is {grid_width}×{grid_height} but the viewport is {width}×{height}")]
    GridMismatch {
        grid_width: u32,
        grid_height: u32,
        width: u32,
        height: u32,
    },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Core(#[from] quadbrot_core::CoreError),
}
