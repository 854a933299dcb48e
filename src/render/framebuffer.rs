//! Frame buffer view for 2D pixel access.
//!
//! Provides a bounds-checked view into an ARGB8888 color buffer, and the
//! [`Painter`] sink that lets the polygon rasterizer write into it.

use super::rasterizer::PixelSink;

/// A view into a color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass a buffer and its dimensions together.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match width * height
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            width as usize * height as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
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

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y). Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Borrow this view as a pixel sink that writes `color`.
    pub fn painter(&mut self, color: u32) -> Painter<'_, 'a> {
        Painter {
            buffer: self,
            color,
        }
    }
}

/// Pixel sink writing a solid color into a [`FrameBuffer`].
///
/// Writes outside the buffer are dropped, which is how polygons hanging off
/// the canvas get clipped.
pub struct Painter<'fb, 'a> {
    buffer: &'fb mut FrameBuffer<'a>,
    color: u32,
}

impl PixelSink for Painter<'_, '_> {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32) {
        self.buffer.set_pixel(x, y, self.color);
    }
}
