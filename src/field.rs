// Field evaluation: one scalar per cell, derived from the pointer distance.
// The squared-distance term separates per axis, so each frame refreshes two
// small tables (one per column, one per row) instead of redoing the full
// distance math in every cell.

use crate::grid::GridGeometry;

pub struct FieldEvaluator {
    dx2: Vec<f32>, // (mouse_x - screen_x[c])^2 per column
    dy2: Vec<f32>, // (mouse_y - screen_y[r])^2 per row
}

impl FieldEvaluator {
    /// Allocate the per-axis tables once; `update` rewrites them in place.
    pub fn new(grid: &GridGeometry) -> Self {
        Self {
            dx2: vec![0.0; grid.cols],
            dy2: vec![0.0; grid.rows],
        }
    }

    /// Refresh the squared-distance tables for this frame's pointer position.
    pub fn update(&mut self, grid: &GridGeometry, mouse_x: f32, mouse_y: f32) {
        for (d, sx) in self.dx2.iter_mut().zip(&grid.screen_x) {
            let dx = mouse_x - sx;
            *d = dx * dx;
        }
        for (d, sy) in self.dy2.iter_mut().zip(&grid.screen_y) {
            let dy = mouse_y - sy;
            *d = dy * dy;
        }
    }

    /// Field value for cell (r, c): natural log of the pointer distance
    /// (via 0.5 * ln of the squared distance, no sqrt needed), scaled by
    /// 200, plus the cell's scratch coordinates. The result is unbounded
    /// and read as a hue angle in degrees by the rasterizer.
    ///
    /// The squared distance floors at 1.0 so the pointer's own cell never
    /// feeds ln() a zero.
    #[inline]
    pub fn value(&self, grid: &GridGeometry, r: usize, c: usize) -> f32 {
        let mut sq = self.dx2[c] + self.dy2[r];
        if sq < 1.0 {
            sq = 1.0;
        }
        let log_dist = 0.5 * sq.ln();
        log_dist * 200.0 + grid.scratch_x[c] + grid.scratch_y[r]
    }
}
