pub mod block;
pub mod compute;
pub mod error;
pub mod grid;
pub mod palette;

pub use block::{Block, DEFAULT_MIN_BLOCK_SIZE};
pub use compute::{
    compute, compute_grid, compute_grid_stats, compute_grid_with, compute_into, ComputeOptions,
    ComputeReport, Mode,
};
pub use error::RenderError;
pub use grid::{GridRegion, PixelGrid};
pub use palette::{colorize, Banded, ColorMap};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
