//! Scan-line polygon filling on the CPU.
//!
//! Given a ring of integer vertices, [`ScanlineRasterizer`] enumerates the
//! pixels inside it row by row and hands each one to a [`PixelSink`]. The
//! rest of the crate is a small harness around it: a canvas to fill into,
//! a demo scene, PNG export and (with the `window` feature) an SDL2 window.
//!
//! # Quick Start
//!
//! ```
//! use scanfill::prelude::*;
//!
//! let ring = vertices(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
//! let mut pixels = Vec::new();
//! let stats = ScanlineRasterizer::new()
//!     .fill_polygon(&ring, &mut |x: i32, y: i32| pixels.push((x, y)))
//!     .unwrap();
//!
//! assert_eq!(stats.pixels, 20);
//! assert_eq!(pixels[0], (0, 0));
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod logging;
pub mod polygon;
pub mod render;
pub mod scene;
#[cfg(feature = "window")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::AppConfig;
pub use polygon::Vertex;
pub use render::rasterizer::fill_polygon;
pub use render::{Canvas, FillStats, PixelSink, RasterError, ScanlineRasterizer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use scanfill::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::AppConfig;
    pub use crate::polygon::{vertices, Vertex};
    pub use crate::render::{
        Canvas, FillStats, FrameBuffer, Painter, PixelSink, RasterError, ScanlineRasterizer,
    };
    pub use crate::scene::{Scene, Shape};

    #[cfg(feature = "window")]
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::rasterizer::{span, ActiveEdgeList, EdgeTable};
}
