// Window + presentation layer.
// Visual effects provided here:
// 1) A window that shows the rendered color field, pixel for pixel.
// 2) The pointer position the field re-centers on every frame.
// The core renders into an RGBA byte buffer; this module owns the one piece
// of glue minifb needs, repacking those bytes into 0x00RRGGBB words.

use crate::error::Error;
use crate::types::PixelBuffer;
use minifb::{Key, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,   // the on-screen window you see
    packed: Vec<u32>, // reused scratch: RGBA bytes repacked for minifb
}

impl Drawer {
    /// Create a window sized to the render target.
    /// Visual: a new empty window appears with your chosen title. minifb
    /// shows the buffer 1:1 at scale X1, so cells keep their hard edges
    /// (there is no smoothing to turn off). The update rate is capped at
    /// 120 FPS so the effect does not spin a core for no visible gain.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(120);
        Ok(Self {
            window,
            packed: vec![0u32; width * height],
        })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new field colors.
    pub fn present(&mut self, fb: &PixelBuffer) -> Result<(), Error> {
        // Repack RGBA quadruples as 0x00RRGGBB; minifb ignores alpha.
        for (word, px) in self.packed.iter_mut().zip(fb.bytes.chunks_exact(4)) {
            *word = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
        self.window
            .update_with_buffer(&self.packed, fb.width, fb.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current pointer position in window pixel coordinates, clamped to the
    /// window edges. None until the cursor has entered the window once.
    /// Visual: the bright rings of the field stay centered on this point.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Clamp)
    }
}
