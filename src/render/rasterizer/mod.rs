//! Polygon rasterization.
//!
//! The fill runs in three stages:
//! - [`EdgeTable`]: non-horizontal polygon sides, sorted by their bottom y
//! - [`ActiveEdgeList`]: the sides crossing the current scan-line
//! - [`span`]: even-odd pairing of crossings into pixel runs
//!
//! [`ScanlineRasterizer`] drives them and writes pixels through a
//! [`PixelSink`], so the algorithm knows nothing about the render target.

mod active_edges;
mod edge_table;
mod error;
mod scanline;
pub mod span;

pub use active_edges::{ActiveEdge, ActiveEdgeList};
pub use edge_table::{Edge, EdgeTable};
pub use error::RasterError;
pub use scanline::ScanlineRasterizer;

use crate::polygon::Vertex;

/// Anything that can receive single-pixel writes.
///
/// Implementors decide what a write means (color, blending, clipping). The
/// rasterizer never checks coordinates against a canvas, so a sink backed by
/// fixed storage must drop or clamp out-of-range pixels itself.
pub trait PixelSink {
    fn set_pixel(&mut self, x: i32, y: i32);
}

impl<F> PixelSink for F
where
    F: FnMut(i32, i32),
{
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32) {
        self(x, y)
    }
}

/// Totals for one successful fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Non-horizontal edges in the edge table.
    pub edges: usize,
    /// Scan-lines visited.
    pub scanlines: usize,
    pub spans: usize,
    pub pixels: usize,
}

impl std::ops::AddAssign for FillStats {
    fn add_assign(&mut self, rhs: Self) {
        self.edges += rhs.edges;
        self.scanlines += rhs.scanlines;
        self.spans += rhs.spans;
        self.pixels += rhs.pixels;
    }
}

/// Fills `ring` into `sink` with a default [`ScanlineRasterizer`].
pub fn fill_polygon<S: PixelSink + ?Sized>(
    ring: &[Vertex],
    sink: &mut S,
) -> Result<FillStats, RasterError> {
    ScanlineRasterizer::new().fill_polygon(ring, sink)
}
