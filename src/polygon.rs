//! Integer polygon vertices.
//!
//! A polygon is an ordered ring of [`Vertex`] values: consecutive vertices,
//! including the wrap-around pair last -> first, form its edges. The
//! rasterizer only borrows vertex slices; nothing here owns pixel data.

use std::collections::HashSet;
use std::fmt;

/// A polygon corner on the integer pixel grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this vertex shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Builds a vertex ring from coordinate pairs.
///
/// ```
/// use scanfill::polygon::{vertices, Vertex};
///
/// let tri = vertices(&[(0, 0), (4, 0), (2, 4)]);
/// assert_eq!(tri[2], Vertex::new(2, 4));
/// ```
pub fn vertices(points: &[(i32, i32)]) -> Vec<Vertex> {
    points.iter().copied().map(Vertex::from).collect()
}

/// Number of distinct positions in the ring.
pub fn distinct_count(ring: &[Vertex]) -> usize {
    ring.iter().collect::<HashSet<_>>().len()
}

/// Twice the signed area of the ring (shoelace formula).
///
/// Positive for counter-clockwise rings in a y-up frame. Self-intersecting
/// rings can sum to zero even though they enclose pixels.
pub fn signed_area2(ring: &[Vertex]) -> i64 {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
        })
        .sum()
}

/// True when every vertex lies on the line through the first two distinct
/// vertices. Such a ring encloses no pixels, whatever its winding.
pub fn is_collinear(ring: &[Vertex]) -> bool {
    let Some(&a) = ring.first() else {
        return true;
    };
    let Some(&b) = ring.iter().find(|&&v| v != a) else {
        return true;
    };
    let (ux, uy) = (b.x as i64 - a.x as i64, b.y as i64 - a.y as i64);
    ring.iter()
        .all(|v| ux * (v.y as i64 - a.y as i64) == uy * (v.x as i64 - a.x as i64))
}

/// Formats a ring as one `(x,y)` per line.
pub fn describe(ring: &[Vertex]) -> String {
    ring.iter().map(|v| format!("{v}\n")).collect()
}
