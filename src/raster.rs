// Color rasterizer: field value -> RGBA -> block fill into the pixel buffer.
// Visual outcomes:
// - Every cell becomes one solid color; neighboring cells step through the
//   hue wheel, which reads as pulsating rainbow rings around the pointer.
// - Edges stay block-sharp: a cell's color is stamped verbatim into each of
//   its pixels, no interpolation anywhere.

use crate::field::FieldEvaluator;
use crate::grid::GridGeometry;
use crate::types::{PixelBuffer, Rgba};

// ----------------------------- HSV -> RGB conversion -----------------------------

/// Convert an HSV color to RGBA bytes. `hue` is in degrees and may be any
/// real number (the field value is unbounded); it wraps into [0, 360).
/// `saturation` and `value` are in [0, 1]; this effect always passes 1.0 for
/// both, but the conversion handles the general case.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgba {
    let mut h = hue % 360.0;
    if h < 0.0 {
        h += 360.0;
    }

    let c = value * saturation;
    let hp = h / 60.0;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match hp as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgba {
        r: ((r + m) * 255.0).clamp(0.0, 255.0) as u8,
        g: ((g + m) * 255.0).clamp(0.0, 255.0) as u8,
        b: ((b + m) * 255.0).clamp(0.0, 255.0) as u8,
        a: 255,
    }
}

// ----------------------------- block fill -----------------------------

/// Stamp one cell's color into its pixel block, clipped to the buffer edges.
/// `x0` and `y0` must already be inside the buffer; callers skip cells that
/// start past the right or bottom edge.
#[inline]
pub fn fill_cell(fb: &mut PixelBuffer, x0: usize, y0: usize, cell_size: usize, color: Rgba) {
    let block_w = cell_size.min(fb.width - x0);
    let block_h = cell_size.min(fb.height - y0);

    if block_w == 2 && block_h == 2 {
        // The overwhelmingly common case at cell size 2: a full block,
        // written as four unrolled quadruples.
        let px = [color.r, color.g, color.b, color.a];
        let top = (y0 * fb.width + x0) * 4;
        let bottom = ((y0 + 1) * fb.width + x0) * 4;
        fb.bytes[top..top + 4].copy_from_slice(&px);
        fb.bytes[top + 4..top + 8].copy_from_slice(&px);
        fb.bytes[bottom..bottom + 4].copy_from_slice(&px);
        fb.bytes[bottom + 4..bottom + 8].copy_from_slice(&px);
    } else {
        fill_block(fb, x0, y0, block_w, block_h, color);
    }
}

/// General clipped block fill. The unrolled path above must stay
/// byte-identical to this loop on full 2x2 blocks.
fn fill_block(
    fb: &mut PixelBuffer,
    x0: usize,
    y0: usize,
    block_w: usize,
    block_h: usize,
    color: Rgba,
) {
    let px = [color.r, color.g, color.b, color.a];
    for by in 0..block_h {
        let row = ((y0 + by) * fb.width + x0) * 4;
        for bx in 0..block_w {
            let idx = row + bx * 4;
            fb.bytes[idx..idx + 4].copy_from_slice(&px);
        }
    }
}

// ----------------------------- per-frame render -----------------------------

/// Render one frame: convert every cell's field value to a color and stamp
/// it into `fb`. Overwrites the whole buffer in place; nothing from the
/// previous frame survives. Cells that start past the buffer edge (possible
/// when the cell size does not divide the dimensions) are skipped.
pub fn render_field(fb: &mut PixelBuffer, grid: &GridGeometry, field: &FieldEvaluator) {
    let cell = grid.cell_size;
    for r in 0..grid.rows {
        let y0 = r * cell;
        if y0 >= fb.height {
            continue;
        }
        for c in 0..grid.cols {
            let x0 = c * cell;
            if x0 >= fb.width {
                continue;
            }
            let color = hsv_to_rgb(field.value(grid, r, c), 1.0, 1.0);
            fill_cell(fb, x0, y0, cell, color);
        }
    }
}
