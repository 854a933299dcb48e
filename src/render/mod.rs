//! Rendering: the polygon rasterizer and the surfaces it draws into.

pub mod canvas;
pub mod framebuffer;
pub mod rasterizer;

pub use canvas::Canvas;
pub use framebuffer::{FrameBuffer, Painter};
pub use rasterizer::{FillStats, PixelSink, RasterError, ScanlineRasterizer};
