//! The active edge list.
//!
//! Holds the edges whose half-open range `[y_bottom, y_top)` contains the
//! current scan-line, each with its running x-intersection.
//!
//! The intersection is stepped as an exact fraction `x_num / dy`: each
//! scan-line adds the integer run `dx` to the numerator. Floating-point
//! stepping drifts by more than any fixed tolerance on tall edges, and a
//! crossing that lands exactly on a column would then lose its pixel.

use std::cmp::Ordering;

use super::edge_table::Edge;
use super::RasterError;

/// An edge crossing the current scan-line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveEdge {
    pub y_top: i32,
    pub inverse_slope: f64,
    /// Numerator of the x-intersection with the current scan-line.
    pub x_num: i128,
    /// Run added to `x_num` per scan-line.
    pub dx: i64,
    /// Denominator of the x-intersection; always positive.
    pub dy: i64,
}

impl ActiveEdge {
    /// Active entry crossing the current scan-line at `x_num / dy`.
    #[cfg(test)]
    pub(crate) fn at(x_num: i128, dy: i64) -> Self {
        Self {
            y_top: i32::MAX,
            inverse_slope: 0.0,
            x_num,
            dx: 0,
            dy,
        }
    }

    /// x-intersection with the current scan-line, rounded to `f64`.
    pub fn x_current(&self) -> f64 {
        self.x_num as f64 / self.dy as f64
    }

    /// Leftmost pixel column at or right of the intersection.
    pub fn x_ceil(&self) -> i64 {
        -((-self.x_num).div_euclid(self.dy as i128)) as i64
    }

    /// Rightmost pixel column at or left of the intersection.
    pub fn x_floor(&self) -> i64 {
        self.x_num.div_euclid(self.dy as i128) as i64
    }

    /// Exact ordering of the two intersections.
    pub fn cmp_x(&self, other: &Self) -> Ordering {
        (self.x_num * other.dy as i128).cmp(&(other.x_num * self.dy as i128))
    }
}

impl From<&Edge> for ActiveEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            y_top: edge.y_top,
            inverse_slope: edge.inverse_slope,
            x_num: edge.x_at_y_bottom as i128 * edge.dy as i128,
            dx: edge.dx,
            dy: edge.dy,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ActiveEdgeList {
    entries: Vec<ActiveEdge>,
}

impl ActiveEdgeList {
    /// Creates a list that can hold `capacity` edges without reallocating.
    pub fn with_capacity(capacity: usize) -> Result<Self, RasterError> {
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(RasterError::exhausted("active edge list", capacity))?;
        Ok(Self { entries })
    }

    /// Activates an edge at its bottom scan-line.
    pub fn insert(&mut self, edge: &Edge) {
        self.entries.push(ActiveEdge::from(edge));
    }

    /// Drops every edge whose top is scan-line `y`.
    pub fn remove_finished(&mut self, y: i32) {
        self.entries.retain(|e| e.y_top != y);
    }

    /// Orders entries by x-intersection; ties keep their previous order.
    pub fn sort(&mut self) {
        self.entries.sort_by(ActiveEdge::cmp_x);
    }

    /// Steps every entry to the next scan-line.
    pub fn advance(&mut self) {
        for e in &mut self.entries {
            e.x_num += e.dx as i128;
        }
    }

    pub fn entries(&self) -> &[ActiveEdge] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
