// Grid geometry: where each coarse cell sits on screen and in scratch space.
// Built once at startup, read-only afterwards; the frame loop never touches
// the math here again.

use crate::error::Error;

/// Per-axis lookup tables for the cell grid.
///
/// `scratch_x`/`scratch_y` are cell-center coordinates in a space centered
/// on the middle of the screen, with y growing upward. `screen_x`/`screen_y`
/// are the same cell centers back in pixel coordinates. The two views always
/// agree through the center: screen = center + scratch on x, and
/// screen = center - scratch on y (the axis flips).
pub struct GridGeometry {
    pub cols: usize,
    pub rows: usize,
    pub cell_size: usize,
    pub scratch_x: Vec<f32>,
    pub scratch_y: Vec<f32>,
    pub screen_x: Vec<f32>,
    pub screen_y: Vec<f32>,
}

impl GridGeometry {
    /// Precompute the per-column and per-row tables for a `width` x `height`
    /// target split into `cell_size`-pixel cells. A final partial column or
    /// row still gets an entry; clipping it is the rasterizer's job.
    ///
    /// A zero cell size is a mistake in the startup constants, so it is
    /// rejected here instead of surfacing as a division panic mid-frame.
    pub fn new(width: usize, height: usize, cell_size: usize) -> Result<Self, Error> {
        if cell_size == 0 {
            return Err(Error::Config("cell size must be at least 1".into()));
        }

        let cols = width.div_ceil(cell_size);
        let rows = height.div_ceil(cell_size);

        let center_x = width as f32 * 0.5;
        let center_y = height as f32 * 0.5;
        let cell = cell_size as f32;

        // First cell center sits half a cell in from the top-left corner.
        let start_x = -center_x + cell * 0.5;
        let start_y = center_y - cell * 0.5;

        let mut scratch_x = Vec::with_capacity(cols);
        let mut screen_x = Vec::with_capacity(cols);
        for c in 0..cols {
            let sx = start_x + c as f32 * cell;
            scratch_x.push(sx);
            screen_x.push(center_x + sx);
        }

        let mut scratch_y = Vec::with_capacity(rows);
        let mut screen_y = Vec::with_capacity(rows);
        for r in 0..rows {
            let sy = start_y - r as f32 * cell;
            scratch_y.push(sy);
            screen_y.push(center_y - sy);
        }

        Ok(Self {
            cols,
            rows,
            cell_size,
            scratch_x,
            scratch_y,
            screen_x,
            screen_y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_counts_round_up() {
        let g = GridGeometry::new(640, 480, 2).unwrap();
        assert_eq!((g.cols, g.rows), (320, 240));

        // Odd dimensions grow a partial final column/row.
        let g = GridGeometry::new(641, 481, 2).unwrap();
        assert_eq!((g.cols, g.rows), (321, 241));

        let g = GridGeometry::new(7, 5, 3).unwrap();
        assert_eq!((g.cols, g.rows), (3, 2));
    }

    #[test]
    fn first_cell_center_sits_half_a_cell_in() {
        let g = GridGeometry::new(640, 480, 2).unwrap();
        assert_eq!(g.screen_x[0], 1.0);
        assert_eq!(g.screen_y[0], 1.0);
        assert_eq!(g.scratch_x[0], -319.0);
        assert_eq!(g.scratch_y[0], 239.0);
    }

    #[test]
    fn interior_cell_centers_stay_on_screen() {
        let g = GridGeometry::new(641, 479, 2).unwrap();
        for c in 0..g.cols - 1 {
            assert!(g.screen_x[c] >= 0.0 && g.screen_x[c] < 641.0, "col {c}");
        }
        for r in 0..g.rows - 1 {
            assert!(g.screen_y[r] >= 0.0 && g.screen_y[r] < 479.0, "row {r}");
        }
    }

    #[test]
    fn screen_and_scratch_agree_through_the_center() {
        let g = GridGeometry::new(100, 60, 4).unwrap();
        for c in 0..g.cols {
            assert_eq!(g.screen_x[c], 50.0 + g.scratch_x[c]);
        }
        for r in 0..g.rows {
            assert_eq!(g.screen_y[r], 30.0 - g.scratch_y[r]);
        }
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        assert!(GridGeometry::new(640, 480, 0).is_err());
    }
}
