//! Span pairing and emission.
//!
//! Sorted x-intersections pair up under the even-odd rule: entries 0-1 bound
//! the first span, 2-3 the second, and so on. Each span covers the pixel
//! columns from `ceil(x_left)` to `floor(x_right)` inclusive, rounded
//! exactly from the fractional intersections.

use super::active_edges::ActiveEdge;
use super::{PixelSink, RasterError};

/// Inclusive run of pixels on one scan-line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x_left: i32,
    pub x_right: i32,
}

impl Span {
    pub fn len(&self) -> usize {
        (self.x_right as i64 - self.x_left as i64 + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.x_right < self.x_left
    }
}

/// Span and pixel totals for one scan-line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineCount {
    pub spans: usize,
    pub pixels: usize,
}

/// Builds the spans for scan-line `y` from an x-sorted active edge list.
///
/// Spans whose rounded bounds cross are dropped. A span that would start on
/// or before the previous span's last column is trimmed so no column is
/// covered twice.
pub fn spans(y: i32, sorted: &[ActiveEdge]) -> Result<Vec<Span>, RasterError> {
    if sorted.len() % 2 != 0 {
        return Err(RasterError::OddActiveEdgeCount {
            y,
            count: sorted.len(),
        });
    }

    let mut out = Vec::with_capacity(sorted.len() / 2);
    let mut next_free = i64::MIN;

    for pair in sorted.chunks_exact(2) {
        let left = pair[0].x_ceil().max(next_free);
        let right = pair[1].x_floor();
        if left > right {
            continue;
        }
        next_free = right + 1;
        out.push(Span {
            y,
            x_left: left as i32,
            x_right: right as i32,
        });
    }

    Ok(out)
}

/// Writes every pixel of scan-line `y` to the sink, left to right.
pub fn emit<S: PixelSink + ?Sized>(
    y: i32,
    sorted: &[ActiveEdge],
    sink: &mut S,
) -> Result<LineCount, RasterError> {
    let mut count = LineCount::default();
    for span in spans(y, sorted)? {
        for x in span.x_left..=span.x_right {
            sink.set_pixel(x, y);
        }
        count.spans += 1;
        count.pixels += span.len();
    }
    Ok(count)
}
