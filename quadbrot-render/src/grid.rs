use crate::block::Block;

/// Per-pixel iteration counts for a full frame, row-major.
///
/// Cells start out `None` ("not computed yet"), which keeps a missing cell
/// distinguishable from any real count, including 0. A computed cell holds
/// `Some(n)` with `n <= max_iterations`; `n == max_iterations` means the
/// point did not escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    cells: Vec<Option<u32>>,
}

impl PixelGrid {
    /// A grid with every cell unset.
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            max_iterations,
            cells: vec![None; size],
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Option<u32>] {
        &self.cells
    }

    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Cells that reached the iteration cap.
    pub fn interior_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Some(self.max_iterations))
            .count()
    }

    /// Plain counts, or `None` while any cell is still unset.
    pub fn to_counts(&self) -> Option<Vec<u32>> {
        self.cells.iter().copied().collect()
    }

    /// Mark every cell unset again so the grid can be reused.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// A writable region covering the whole grid.
    pub fn region(&mut self) -> GridRegion<'_> {
        let block = Block::new(0, 0, self.width, self.height);
        let rows = if self.width == 0 {
            Vec::new()
        } else {
            self.cells.chunks_mut(self.width as usize).collect()
        };
        GridRegion { block, rows }
    }
}

/// Exclusive write access to one rectangular block of a [`PixelGrid`].
///
/// Holds one mutable row slice per row of the block. [`split`](Self::split)
/// consumes the region and hands out four regions built with
/// `split_at_mut`, so the borrow checker guarantees that concurrently
/// running quadrant tasks never touch the same cell.
pub struct GridRegion<'a> {
    block: Block,
    rows: Vec<&'a mut [Option<u32>]>,
}

impl<'a> GridRegion<'a> {
    pub fn block(&self) -> Block {
        self.block
    }

    /// Split into `[top_left, top_right, bottom_left, bottom_right]`,
    /// matching [`Block::split`].
    pub fn split(self) -> [GridRegion<'a>; 4] {
        let [tl, tr, bl, br] = self.block.split();
        let mut top = self.rows;
        let bottom = top.split_off(tl.height as usize);
        let (top_left, top_right) = split_columns(top, tl.width as usize);
        let (bottom_left, bottom_right) = split_columns(bottom, bl.width as usize);
        [
            GridRegion {
                block: tl,
                rows: top_left,
            },
            GridRegion {
                block: tr,
                rows: top_right,
            },
            GridRegion {
                block: bl,
                rows: bottom_left,
            },
            GridRegion {
                block: br,
                rows: bottom_right,
            },
        ]
    }

    /// Visit every cell still unset, writing the value `f(px, py)` returns.
    ///
    /// Already-written cells are skipped, so filling a block twice leaves
    /// the first results in place. Returns the number of cells written.
    pub fn fill_unset<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(u32, u32) -> u32,
    {
        let mut written = 0;
        for (dy, row) in self.rows.iter_mut().enumerate() {
            let py = self.block.y + dy as u32;
            for (dx, cell) in row.iter_mut().enumerate() {
                if cell.is_none() {
                    *cell = Some(f(self.block.x + dx as u32, py));
                    written += 1;
                }
            }
        }
        written
    }
}

fn split_columns<'a>(
    rows: Vec<&'a mut [Option<u32>]>,
    at: usize,
) -> (Vec<&'a mut [Option<u32>]>, Vec<&'a mut [Option<u32>]>) {
    rows.into_iter().map(|row| row.split_at_mut(at)).unzip()
}
