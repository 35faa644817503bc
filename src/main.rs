// What you SEE now:
// • A wall of tiny 2x2 color cells filling the window, stepping through the
//   hue wheel in rings centered on the mouse pointer.
// • Move the mouse: the rings re-center and the whole field "scratches"
//   sideways as the log-distance bands sweep across the cells.
// • ESC quits, or just close the window.

use pixel_grid::draw::Drawer;
use pixel_grid::error::Error;
use pixel_grid::field::FieldEvaluator;
use pixel_grid::grid::GridGeometry;
use pixel_grid::raster::render_field;
use pixel_grid::types::PixelBuffer;
use std::time::{Duration, Instant};

// Render-target size and cell size. The cell size is the one knob this
// effect has; 2 keeps the blocks just visible at a normal viewing distance.
const WIDTH: usize = 1280;
const HEIGHT: usize = 720;
const CELL_SIZE: usize = 2;

fn main() -> Result<(), Error> {
    env_logger::init();

    /* --- Geometry + window setup ---
       Visual: the window opens black until the first frame lands. */
    let grid = GridGeometry::new(WIDTH, HEIGHT, CELL_SIZE)?;
    let mut drawer = Drawer::new("Scratch Pixel Grid Effect", WIDTH, HEIGHT)?;
    log::info!(
        "render target {}x{}, grid {}x{} cells of {} px",
        WIDTH,
        HEIGHT,
        grid.cols,
        grid.rows,
        CELL_SIZE
    );

    /* --- Reusable buffers ---
       Visual: `screen` is the image you actually see each frame; `field`
       holds the per-axis distance tables. Nothing allocates per frame. */
    let mut screen = PixelBuffer::new(WIDTH, HEIGHT);
    let mut field = FieldEvaluator::new(&grid);

    /* --- FPS bookkeeping --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Pointer position for this frame. Clamping keeps the field
              anchored to the nearest edge when the cursor leaves the window;
              until the first mouse event arrives, treat it as centered. */
        let (mouse_x, mouse_y) = drawer
            .mouse_pos()
            .unwrap_or((WIDTH as f32 * 0.5, HEIGHT as f32 * 0.5));

        /* 2) Field pass: refresh the per-axis distance tables.
           Visual: decides where this frame's rings sit. */
        field.update(&grid, mouse_x, mouse_y);

        /* 3) Raster pass: every cell gets its color for this frame. */
        render_field(&mut screen, &grid, &field);

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 5) FPS counter (logged once per second). */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            log::info!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
