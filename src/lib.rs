// Scratch pixel grid effect: a mouse-reactive procedural color field.
// The computational stages (grid geometry, field evaluation, rasterization)
// live in the library so tests and benches can drive them without a window;
// the binary in main.rs adds the window and the frame loop.

pub mod draw;
pub mod error;
pub mod field;
pub mod grid;
pub mod raster;
pub mod types;
