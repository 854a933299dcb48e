//! Owned drawing surface.
//!
//! [`Canvas`] owns the ARGB color buffer the scene is filled into, and offers
//! the handful of primitives the harness needs around the polygon fill:
//! clearing, a background grid, vertex markers and polygon outlines.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use super::framebuffer::FrameBuffer;
use crate::colors;
use crate::polygon::Vertex;

pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = width as usize * height as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
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
        self.as_framebuffer().set_pixel(x, y, color);
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    pub fn draw_grid(&mut self, spacing: i32, color: u32) {
        if spacing <= 0 {
            return;
        }
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x % spacing == 0 || y % spacing == 0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// The error term tracks the distance between the ideal line and the
    /// current pixel; when it crosses a threshold we also step along the
    /// minor axis. Integer arithmetic only.
    pub fn draw_line(&mut self, from: Vertex, to: Vertex, color: u32) {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        let x_step = if from.x < to.x { 1 } else { -1 };
        let y_step = if from.y < to.y { 1 } else { -1 };

        let mut err = dx - dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.set_pixel(x, y, color);
            if x == to.x && y == to.y {
                break;
            }

            // Both conditions can hold, giving a diagonal step.
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_step;
            }
            if e2 < dx {
                err += dx;
                y += y_step;
            }
        }
    }

    /// Outlines a closed vertex ring.
    pub fn draw_outline(&mut self, ring: &[Vertex], color: u32) {
        let n = ring.len();
        for i in 0..n {
            self.draw_line(ring[i], ring[(i + 1) % n], color);
        }
    }

    /// Marks each vertex with a small square.
    pub fn draw_vertices(&mut self, ring: &[Vertex], size: i32, color: u32) {
        for v in ring {
            self.draw_rect(v.x - size / 2, v.y - size / 2, size, size, color);
        }
    }

    /// Returns the color buffer as raw ARGB8888 bytes in native byte order,
    /// the layout SDL expects for a streaming ARGB8888 texture.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and u8 has alignment 1, so any u32 slice
        // is a valid byte slice of four times the length.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }

    /// Copies the canvas into an RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            Rgba(colors::to_rgba(self.color_buffer[y as usize * self.width as usize + x as usize]))
        })
    }

    /// Writes the canvas to an image file; the format follows the extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_image().save(path)
    }
}
