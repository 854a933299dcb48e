//! Scan-line polygon fill.
//!
//! # Algorithm Overview
//!
//! The polygon is processed one horizontal line at a time, from the lowest
//! edge bottom to the highest edge top:
//!
//! 1. **Insert** edges from the sorted [`EdgeTable`] whose `y_bottom` is the
//!    current line. A single forward cursor is enough because the table is
//!    ordered by `y_bottom`.
//! 2. **Remove** active edges whose `y_top` is the current line. Edges cover
//!    the half-open range `[y_bottom, y_top)`, so a vertex shared by two
//!    consecutive edges is counted once, a local minimum twice and a local
//!    maximum not at all. That keeps the active count even on every line.
//! 3. **Sort** the active edges by x. Edges of different slope can swap
//!    places between lines, so this is redone every line.
//! 4. **Emit** spans by even-odd pairing.
//! 5. **Advance** each active x by its inverse slope.
//!
//! ```text
//!  y=3   . . X . .        (2,4)
//!  y=2   . X X X .          /\
//!  y=1   . X X X .         /  \
//!  y=0   X X X X X   (0,0)/____\(4,0)
//! ```
//!
//! Rows are half-open (the top row is not filled) and columns are closed
//! (both crossings are filled).
//!
//! # References
//!
//! - Foley, van Dam et al., "Computer Graphics: Principles and Practice",
//!   section 3.6

use super::active_edges::{ActiveEdge, ActiveEdgeList};
use super::edge_table::EdgeTable;
use super::{span, FillStats, PixelSink, RasterError};
use crate::polygon::{self, Vertex};

/// Scan-line polygon rasterizer.
///
/// Stateless: all working storage lives for one call, so a single instance
/// can be shared between threads, each writing into its own sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Fills the polygon, writing each interior pixel to `sink` exactly once.
    ///
    /// Pixels arrive in ascending y, and ascending x within a scan-line.
    /// Degenerate rings fail before any pixel is written. If a consistency
    /// error stops the fill, rows already written are left as they are.
    pub fn fill_polygon<S: PixelSink + ?Sized>(
        &self,
        ring: &[Vertex],
        sink: &mut S,
    ) -> Result<FillStats, RasterError> {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("filling {} vertices:\n{}", ring.len(), polygon::describe(ring));
        }
        let table = EdgeTable::build(ring)?;
        self.fill_edge_table(&table, sink)
    }

    /// Runs the scan-line loop over an already built edge table.
    pub fn fill_edge_table<S: PixelSink + ?Sized>(
        &self,
        table: &EdgeTable,
        sink: &mut S,
    ) -> Result<FillStats, RasterError> {
        let (Some(y_min), Some(y_max)) = (table.y_min(), table.y_max()) else {
            return Err(RasterError::AllEdgesHorizontal);
        };

        let edges = table.edges();
        let mut active = ActiveEdgeList::with_capacity(edges.len())?;
        let mut next = 0;
        let mut stats = FillStats {
            edges: edges.len(),
            ..FillStats::default()
        };

        let mut y = y_min;
        while y <= y_max {
            while next < edges.len() && edges[next].y_bottom == y {
                active.insert(&edges[next]);
                next += 1;
            }
            active.remove_finished(y);

            if active.is_empty() && next == edges.len() {
                break;
            }

            active.sort();
            let line = span::emit(y, active.entries(), &mut *sink)?;
            if log::log_enabled!(log::Level::Trace) {
                let xs: Vec<f64> = active.entries().iter().map(ActiveEdge::x_current).collect();
                log::trace!(
                    "scan-line {y}: crossings {xs:?}, {} spans, {} pixels",
                    line.spans,
                    line.pixels
                );
            }

            stats.scanlines += 1;
            stats.spans += line.spans;
            stats.pixels += line.pixels;

            active.advance();
            y += 1;
        }

        log::debug!(
            "filled polygon: {} edges, rows {}..{}, {} spans, {} pixels",
            stats.edges,
            y_min,
            y_max,
            stats.spans,
            stats.pixels
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::vertices;
    use std::collections::{BTreeMap, HashSet};

    fn fill(points: &[(i32, i32)]) -> Result<Vec<(i32, i32)>, RasterError> {
        let mut pixels = Vec::new();
        let mut sink = |x: i32, y: i32| pixels.push((x, y));
        ScanlineRasterizer::new().fill_polygon(&vertices(points), &mut sink)?;
        Ok(pixels)
    }

    /// Groups pixels into (y -> sorted xs).
    fn rows(pixels: &[(i32, i32)]) -> BTreeMap<i32, Vec<i32>> {
        let mut rows: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
        for &(x, y) in pixels {
            rows.entry(y).or_default().push(x);
        }
        rows
    }

    fn row_span(xs: &[i32]) -> (i32, i32) {
        (xs[0], xs[xs.len() - 1])
    }

    #[test]
    fn test_square() {
        let pixels = fill(&[(0, 0), (4, 0), (4, 4), (0, 4)]).unwrap();
        let rows = rows(&pixels);
        assert_eq!(rows.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        for xs in rows.values() {
            assert_eq!(xs, &vec![0, 1, 2, 3, 4]);
        }
        assert_eq!(pixels.len(), 20);
    }

    #[test]
    fn test_triangle() {
        let pixels = fill(&[(0, 0), (4, 0), (2, 4)]).unwrap();
        let rows = rows(&pixels);
        assert_eq!(rows[&0], vec![0, 1, 2, 3, 4]);
        assert_eq!(rows[&1], vec![1, 2, 3]);
        assert_eq!(rows[&2], vec![1, 2, 3]);
        assert_eq!(rows[&3], vec![2]);
        assert!(pixels.iter().all(|&(_, y)| (0..4).contains(&y)));
    }

    #[test]
    fn test_winding_order_does_not_matter() {
        let ccw = fill(&[(0, 0), (7, 1), (5, 6), (1, 5)]).unwrap();
        let cw = fill(&[(1, 5), (5, 6), (7, 1), (0, 0)]).unwrap();
        assert_eq!(ccw, cw);
    }

    #[test]
    fn test_emission_order() {
        let pixels = fill(&[(0, 0), (10, 2), (6, 9), (-3, 7)]).unwrap();
        assert!(pixels.windows(2).all(|w| (w[0].1, w[0].0) < (w[1].1, w[1].0)));
    }

    #[test]
    fn test_deterministic() {
        let ring = [(3, -2), (12, 4), (9, 11), (4, 6), (-1, 9)];
        assert_eq!(fill(&ring).unwrap(), fill(&ring).unwrap());
    }

    #[test]
    fn test_convex_single_span_and_area() {
        let ring = [(2, 0), (20, 3), (25, 15), (10, 22), (0, 12)];
        let pixels = fill(&ring).unwrap();
        let rows = rows(&pixels);

        for xs in rows.values() {
            let (lo, hi) = row_span(xs);
            assert_eq!(xs.len() as i32, hi - lo + 1, "row is not contiguous");
        }

        let area = crate::polygon::signed_area2(&vertices(&ring)).abs() as f64 / 2.0;
        let boundary_rows = rows.len() as f64;
        assert!((pixels.len() as f64 - area).abs() <= boundary_rows);
    }

    #[test]
    fn test_concave_row_has_two_spans() {
        // U shape opening upwards.
        let ring = [(0, 0), (9, 0), (9, 6), (6, 6), (6, 2), (3, 2), (3, 6), (0, 6)];
        let pixels = fill(&ring).unwrap();
        let rows = rows(&pixels);
        assert_eq!(rows[&1], (0..=9).collect::<Vec<_>>());
        assert_eq!(rows[&4], vec![0, 1, 2, 3, 6, 7, 8, 9]);
        assert!(!rows.contains_key(&6));
    }

    #[test]
    fn test_bow_tie_even_odd() {
        let pixels = fill(&[(0, 0), (4, 4), (4, 0), (0, 4)]).unwrap();
        let rows = rows(&pixels);
        assert_eq!(rows[&0], vec![0, 4]);
        assert_eq!(rows[&1], vec![0, 1, 3, 4]);
        assert_eq!(rows[&2], vec![0, 1, 2, 3, 4]);
        assert_eq!(rows[&3], vec![0, 1, 3, 4]);
        assert!(!rows.contains_key(&4));

        let unique: HashSet<_> = pixels.iter().collect();
        assert_eq!(unique.len(), pixels.len());
    }

    #[test]
    fn test_pentagram_center_is_hole() {
        let star = [(50, 0), (79, 90), (2, 35), (98, 35), (21, 90)];
        let pixels: HashSet<(i32, i32)> = fill(&star).unwrap().into_iter().collect();
        // Inside the points, outside the pentagon in the middle.
        assert!(pixels.contains(&(50, 10)));
        assert!(!pixels.contains(&(50, 50)));
    }

    #[test]
    fn test_no_pixel_written_twice() {
        // Notch from the top: the spans meet at the notch vertex.
        let ring = [(0, 0), (8, 0), (8, 6), (4, 2), (0, 6)];
        let pixels = fill(&ring).unwrap();
        let unique: HashSet<_> = pixels.iter().collect();
        assert_eq!(unique.len(), pixels.len());
        assert_eq!(rows(&pixels)[&2], (0..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_two_distinct_vertices_makes_no_calls() {
        let mut calls = 0;
        let mut sink = |_: i32, _: i32| calls += 1;
        let err = ScanlineRasterizer::new()
            .fill_polygon(&vertices(&[(0, 0), (5, 5), (0, 0)]), &mut sink)
            .unwrap_err();
        assert!(err.is_degenerate());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_stats() {
        let mut sink = |_: i32, _: i32| {};
        let stats = ScanlineRasterizer::new()
            .fill_polygon(&vertices(&[(0, 0), (4, 0), (4, 4), (0, 4)]), &mut sink)
            .unwrap();
        assert_eq!(
            stats,
            FillStats {
                edges: 2,
                scanlines: 4,
                spans: 4,
                pixels: 20,
            }
        );
    }

    #[test]
    fn test_tall_shallow_edges_keep_boundary_pixels() {
        // Both long sides have slope 1/3; every third row they cross a column
        // exactly, and that column must be filled.
        let ring = vertices(&[(-2, 0), (0, 0), (1_000_000, 3_000_000), (999_998, 3_000_000)]);
        let mut extent: Vec<(i32, i32)> = vec![(i32::MAX, i32::MIN); 3_000_000];
        let mut sink = |x: i32, y: i32| {
            let row = &mut extent[y as usize];
            row.0 = row.0.min(x);
            row.1 = row.1.max(x);
        };
        ScanlineRasterizer::new().fill_polygon(&ring, &mut sink).unwrap();

        for (y, &(lo, hi)) in extent.iter().enumerate() {
            let y = y as i32;
            assert_eq!(hi, y.div_euclid(3), "right edge at y = {y}");
            assert_eq!(lo, -((6 - y).div_euclid(3)), "left edge at y = {y}");
        }
    }

    #[test]
    fn test_collinear_ring_makes_no_calls() {
        let mut calls = 0;
        let mut sink = |_: i32, _: i32| calls += 1;
        let err = ScanlineRasterizer::new()
            .fill_polygon(&vertices(&[(0, 0), (3, 3), (6, 6)]), &mut sink)
            .unwrap_err();
        assert_eq!(err, RasterError::CollinearVertices);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_negative_coordinates() {
        let pixels = fill(&[(-4, -4), (0, -4), (0, 0), (-4, 0)]).unwrap();
        assert_eq!(pixels.first(), Some(&(-4, -4)));
        assert_eq!(pixels.last(), Some(&(0, -1)));
    }
}
