//! Edge table construction.
//!
//! Every non-horizontal side of the polygon becomes an [`Edge`] oriented from
//! its lower endpoint to its upper one. Horizontal sides never cross a
//! scan-line and are dropped here, so they cannot be counted twice later.
//!
//! ```text
//!   (2,4)                 y_top    = 4
//!     /\                  y_bottom = 0
//!    /  \                 x_at_y_bottom = 4
//!   /____\                inverse_slope = (2 - 4) / (4 - 0) = -0.5
//! (0,0)  (4,0)  <- horizontal, skipped
//! ```

use super::RasterError;
use crate::polygon::{self, Vertex};

/// One non-horizontal polygon side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Larger y of the two endpoints. The edge is inactive from this row on.
    pub y_top: i32,
    /// Smaller y of the two endpoints.
    pub y_bottom: i32,
    /// x of the endpoint at `y_bottom`.
    pub x_at_y_bottom: f64,
    /// Change in x per unit step in y, measured bottom to top.
    pub inverse_slope: f64,
    /// Exact run and rise, bottom to top; `dy > 0`.
    pub dx: i64,
    pub dy: i64,
}

impl Edge {
    /// Builds the edge between two vertices, or `None` when it is horizontal.
    pub fn between(a: Vertex, b: Vertex) -> Option<Self> {
        if a.y == b.y {
            return None;
        }
        let (bottom, top) = if a.y < b.y { (a, b) } else { (b, a) };
        let dx = top.x as i64 - bottom.x as i64;
        let dy = top.y as i64 - bottom.y as i64;

        Some(Self {
            y_top: top.y,
            y_bottom: bottom.y,
            x_at_y_bottom: bottom.x as f64,
            inverse_slope: dx as f64 / dy as f64,
            dx,
            dy,
        })
    }
}

/// All edges of one polygon, ordered by `(y_bottom, x_at_y_bottom)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeTable {
    edges: Vec<Edge>,
}

impl EdgeTable {
    /// Builds and sorts the edge table for a vertex ring.
    ///
    /// Rejects rings with fewer than three vertices, fewer than three distinct
    /// positions, no non-horizontal side, or all vertices on one line.
    pub fn build(ring: &[Vertex]) -> Result<Self, RasterError> {
        let n = ring.len();
        if n < 3 {
            return Err(RasterError::TooFewVertices { count: n });
        }
        let distinct = polygon::distinct_count(ring);
        if distinct < 3 {
            return Err(RasterError::TooFewDistinctVertices { distinct });
        }

        let mut edges = Vec::new();
        edges
            .try_reserve_exact(n)
            .map_err(RasterError::exhausted("edge table", n))?;
        edges.extend((0..n).filter_map(|i| Edge::between(ring[i], ring[(i + 1) % n])));

        if edges.is_empty() {
            return Err(RasterError::AllEdgesHorizontal);
        }
        if polygon::is_collinear(ring) {
            return Err(RasterError::CollinearVertices);
        }

        // sort_by is stable: equal keys keep ring order.
        edges.sort_by(|a, b| {
            a.y_bottom
                .cmp(&b.y_bottom)
                .then(a.x_at_y_bottom.total_cmp(&b.x_at_y_bottom))
        });

        Ok(Self { edges })
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// First scan-line any edge touches.
    pub fn y_min(&self) -> Option<i32> {
        self.edges.first().map(|e| e.y_bottom)
    }

    /// Scan-line at which the last edge leaves the active list.
    pub fn y_max(&self) -> Option<i32> {
        self.edges.iter().map(|e| e.y_top).max()
    }
}
