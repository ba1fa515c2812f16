use rayon::prelude::*;

use crate::grid::PixelGrid;

/// Maps one grid cell to an RGBA color.
///
/// `iterations` is `None` for a cell that was never computed.
pub trait ColorMap: Sync {
    fn color(&self, iterations: Option<u32>, max_iterations: u32) -> [u8; 4];
}

/// Cyclic bands: each channel repeats at a different period so
/// neighbouring escape counts get clearly distinct colors.
///
/// Interior points are black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banded {
    pub interior: [u8; 4],
    /// Shown for unset cells so gaps in a grid stand out.
    pub unset: [u8; 4],
}

impl Default for Banded {
    fn default() -> Self {
        Self {
            interior: [0, 0, 0, 255],
            unset: [255, 0, 255, 255],
        }
    }
}

impl ColorMap for Banded {
    fn color(&self, iterations: Option<u32>, max_iterations: u32) -> [u8; 4] {
        match iterations {
            None => self.unset,
            Some(n) if n >= max_iterations => self.interior,
            Some(n) => [
                ((n % 8) * 32) as u8,
                ((n % 16) * 16) as u8,
                ((n % 32) * 8) as u8,
                255,
            ],
        }
    }
}

/// Colorize a whole grid into row-major RGBA bytes.
pub fn colorize<M: ColorMap>(grid: &PixelGrid, map: &M) -> Vec<u8> {
    let max_iter = grid.max_iterations;
    let mut pixels = vec![0u8; grid.cells().len() * 4];
    pixels
        .par_chunks_mut(4)
        .zip(grid.cells().par_iter())
        .for_each(|(pixel, &cell)| {
            pixel.copy_from_slice(&map.color(cell, max_iter));
        });
    pixels
}
