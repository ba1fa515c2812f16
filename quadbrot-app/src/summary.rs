use serde::Serialize;

use quadbrot_core::PlaneWindow;
use quadbrot_render::{ComputeReport, Mode};

/// What a headless run prints on stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub width: u32,
    pub height: u32,
    pub mode: Mode,
    pub max_iterations: u32,
    pub window: PlaneWindow,
    pub elapsed_ms: u128,
    pub leaf_blocks: usize,
    pub interior: usize,
    pub escaped: usize,
    /// Mean count over escaped cells only; 0 when nothing escaped.
    pub mean_escape_iterations: f64,
}

impl Summary {
    pub fn new(mode: Mode, report: &ComputeReport) -> Self {
        let grid = &report.grid;
        let max_iter = grid.max_iterations;
        let (escaped, total) = grid
            .cells()
            .iter()
            .flatten()
            .filter(|&&n| n < max_iter)
            .fold((0usize, 0u64), |(count, sum), &n| (count + 1, sum + n as u64));

        Self {
            width: grid.width,
            height: grid.height,
            mode,
            max_iterations: max_iter,
            window: report.viewport.window,
            elapsed_ms: report.elapsed.as_millis(),
            leaf_blocks: report.leaf_blocks,
            interior: grid.interior_count(),
            escaped,
            mean_escape_iterations: if escaped == 0 {
                0.0
            } else {
                total as f64 / escaped as f64
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use quadbrot_core::Viewport;
    use quadbrot_render::PixelGrid;

    #[test]
    fn counts_interior_and_escaped() {
        let mut grid = PixelGrid::new(2, 2, 10);
        grid.region()
            .fill_unset(|x, y| if x == 0 && y == 0 { 10 } else { x + y + 1 });
        // cells: 10, 2, 2, 3
        let window = PlaneWindow::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let report = ComputeReport {
            grid,
            viewport: Viewport::new(&window, 2, 2).unwrap(),
            elapsed: Duration::from_millis(12),
            leaf_blocks: 1,
        };
        let s = Summary::new(Mode::Parallel, &report);

        assert_eq!(s.interior, 1);
        assert_eq!(s.escaped, 3);
        assert!((s.mean_escape_iterations - 7.0 / 3.0).abs() < 1e-12);
        assert_eq!(s.elapsed_ms, 12);

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["mode"], "parallel");
        assert_eq!(json["window"]["re_min"], -2.0);
    }
}
