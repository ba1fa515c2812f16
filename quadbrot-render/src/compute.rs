use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use quadbrot_core::{Fractal, Mandelbrot, ViewState, Viewport};

use crate::block::DEFAULT_MIN_BLOCK_SIZE;
use crate::error::RenderError;
use crate::grid::{GridRegion, PixelGrid};

// ---------------------------------------------------------------------------
// Mode and options
// ---------------------------------------------------------------------------

/// How the grid is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    /// One pass over the whole grid on the calling thread.
    Sequential,
    /// Recursive quadrant decomposition on a work-stealing pool.
    #[default]
    Parallel,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            _ => Err(RenderError::InvalidMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = RenderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

/// Tuning for one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeOptions {
    pub mode: Mode,
    /// Blocks smaller than this on either axis are filled sequentially.
    pub min_block_size: u32,
    /// Worker count for a dedicated pool; `None` uses the global pool,
    /// which is sized to the available hardware concurrency.
    pub threads: Option<usize>,
}

impl ComputeOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_min_block_size(self, min_block_size: u32) -> Self {
        Self {
            min_block_size,
            ..self
        }
    }

    pub fn with_threads(self, threads: usize) -> Self {
        Self {
            threads: Some(threads),
            ..self
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.min_block_size == 0 {
            return Err(RenderError::InvalidBlockSize(self.min_block_size));
        }
        Ok(())
    }
}

impl Default for ComputeOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            min_block_size: DEFAULT_MIN_BLOCK_SIZE,
            threads: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// A completed grid plus what it took to produce it.
#[derive(Debug, Clone)]
pub struct ComputeReport {
    pub grid: PixelGrid,
    /// The mapping the grid was computed with.
    pub viewport: Viewport,
    pub elapsed: Duration,
    /// Blocks filled by the sequential base case.
    pub leaf_blocks: usize,
}

// ---------------------------------------------------------------------------
// Base case and recursion
// ---------------------------------------------------------------------------

/// Fill every unset cell of `region` in one pass.
fn fill_block<F: Fractal>(fractal: &F, viewport: &Viewport, region: &mut GridRegion<'_>) {
    region.fill_unset(|px, py| fractal.iterate(viewport.pixel_to_complex(px, py)));
}

/// One node of the recursive decomposition: a region of the grid plus the
/// fixed mapping every pixel in it is evaluated with.
struct QuadTask<'a, 'g, F> {
    fractal: &'a F,
    viewport: &'a Viewport,
    region: GridRegion<'g>,
    min_block_size: u32,
    leaves: &'a AtomicUsize,
}

impl<F: Fractal + Sync> QuadTask<'_, '_, F> {
    /// Fill the region, or fork one child per quadrant and join them all
    /// before returning.
    fn run(self) {
        let QuadTask {
            fractal,
            viewport,
            mut region,
            min_block_size,
            leaves,
        } = self;

        let block = region.block();
        if block.is_empty() {
            return;
        }
        if block.is_leaf(min_block_size) {
            fill_block(fractal, viewport, &mut region);
            leaves.fetch_add(1, Ordering::Relaxed);
            return;
        }

        let quadrants = region.split();
        rayon::scope(|s| {
            for region in quadrants {
                let child = QuadTask {
                    fractal,
                    viewport,
                    region,
                    min_block_size,
                    leaves,
                };
                s.spawn(move |_| child.run());
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Fill `grid` for `viewport`, leaving already-set cells untouched.
///
/// The grid must match the viewport's dimensions and should be fully unset
/// (see [`PixelGrid::clear`]) for a fresh result. Returns the number of
/// leaf blocks filled.
pub fn compute_into<F: Fractal + Sync>(
    fractal: &F,
    viewport: &Viewport,
    grid: &mut PixelGrid,
    options: &ComputeOptions,
) -> crate::Result<usize> {
    options.validate()?;
    if grid.width != viewport.width || grid.height != viewport.height {
        return Err(RenderError::GridMismatch {
            grid_width: grid.width,
            grid_height: grid.height,
            width: viewport.width,
            height: viewport.height,
        });
    }

    match options.mode {
        Mode::Sequential => {
            fill_block(fractal, viewport, &mut grid.region());
            Ok(1)
        }
        Mode::Parallel => {
            let leaves = AtomicUsize::new(0);
            let root = QuadTask {
                fractal,
                viewport,
                region: grid.region(),
                min_block_size: options.min_block_size,
                leaves: &leaves,
            };
            match options.threads {
                Some(n) => {
                    let pool = rayon::ThreadPoolBuilder::new()
                        .num_threads(n)
                        .thread_name(|i| format!("quadbrot-worker-{i}"))
                        .build()?;
                    pool.install(|| root.run());
                }
                None => root.run(),
            }
            Ok(leaves.into_inner())
        }
    }
}

/// Compute a fresh grid for any escape-time fractal.
pub fn compute<F: Fractal + Sync>(
    fractal: &F,
    viewport: &Viewport,
    options: &ComputeOptions,
) -> crate::Result<ComputeReport> {
    options.validate()?;
    let start = Instant::now();
    let mut grid = PixelGrid::new(viewport.width, viewport.height, fractal.max_iterations());
    debug!(
        width = viewport.width,
        height = viewport.height,
        mode = %options.mode,
        min_block_size = options.min_block_size,
        threads = ?options.threads,
        "Starting grid computation"
    );

    let leaf_blocks = compute_into(fractal, viewport, &mut grid, options)?;
    debug_assert!(grid.is_complete());

    let elapsed = start.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis(),
        leaf_blocks,
        mode = %options.mode,
        "Grid computation complete"
    );

    Ok(ComputeReport {
        grid,
        viewport: *viewport,
        elapsed,
        leaf_blocks,
    })
}

/// Validate `view` and dimensions, then compute the Mandelbrot grid.
///
/// All validation happens before any work is scheduled; on error no
/// partial grid is returned.
pub fn compute_grid_stats(
    view: &ViewState,
    width: u32,
    height: u32,
    max_iter: u32,
    options: &ComputeOptions,
) -> crate::Result<ComputeReport> {
    options.validate()?;
    let fractal = Mandelbrot::new(max_iter)?;
    let window = view.window()?;
    let viewport = Viewport::new(&window, width, height)?;
    debug!(
        re_min = window.re_min,
        re_max = window.re_max,
        im_min = window.im_min,
        im_max = window.im_max,
        "Plane window"
    );
    compute(&fractal, &viewport, options)
}

/// [`compute_grid_stats`] without the report.
pub fn compute_grid_with(
    view: &ViewState,
    width: u32,
    height: u32,
    max_iter: u32,
    options: &ComputeOptions,
) -> crate::Result<PixelGrid> {
    compute_grid_stats(view, width, height, max_iter, options).map(|report| report.grid)
}

/// Compute the iteration grid for `view` at `width × height` pixels.
pub fn compute_grid(
    view: &ViewState,
    width: u32,
    height: u32,
    mode: Mode,
    max_iter: u32,
) -> crate::Result<PixelGrid> {
    compute_grid_with(view, width, height, max_iter, &ComputeOptions::new(mode))
}
