//! CPU color buffer.
//!
//! [`Renderer`] owns an ARGB8888 pixel buffer. The window copies it into a
//! streaming texture on present; on its own it works as a headless surface.

use super::Surface;
use crate::colors;
use crate::error::Result;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Number of pixels currently holding `color`.
    pub fn count(&self, color: u32) -> usize {
        self.color_buffer.iter().filter(|&&c| c == color).count()
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8, and the
        // byte slice covers exactly the buffer's memory for the borrow's life.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }
}

impl Surface for Renderer {
    fn clear(&mut self, color: u32) {
        Renderer::clear(self, color);
    }

    fn plot(&mut self, x: i32, y: i32, color: u32) {
        self.set_pixel(x, y, color);
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
