use std::collections::TryReserveError;
use std::fmt;

/// Reasons a polygon fill can fail.
///
/// Degenerate input is rejected before the sink sees a single pixel. A
/// consistency failure aborts mid-fill; rows already written stay written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The ring has fewer than three vertices.
    TooFewVertices { count: usize },
    /// The ring has three or more vertices but fewer than three positions.
    TooFewDistinctVertices { distinct: usize },
    /// Every edge is horizontal, so no scan-line crosses the polygon.
    AllEdgesHorizontal,
    /// Every vertex lies on one line, so the ring encloses no area.
    CollinearVertices,
    /// An odd number of edges crossed scan-line `y`.
    OddActiveEdgeCount { y: i32, count: usize },
    /// A working buffer could not be allocated.
    ResourceExhausted { what: &'static str, requested: usize },
}

impl RasterError {
    /// True for the variants that reject the input up front.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            RasterError::TooFewVertices { .. }
                | RasterError::TooFewDistinctVertices { .. }
                | RasterError::AllEdgesHorizontal
                | RasterError::CollinearVertices
        )
    }

    pub(crate) fn exhausted(
        what: &'static str,
        requested: usize,
    ) -> impl FnOnce(TryReserveError) -> Self {
        move |_| RasterError::ResourceExhausted { what, requested }
    }
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::TooFewVertices { count } => {
                write!(f, "degenerate polygon: {count} vertices, need at least 3")
            }
            RasterError::TooFewDistinctVertices { distinct } => {
                write!(f, "degenerate polygon: only {distinct} distinct vertices")
            }
            RasterError::AllEdgesHorizontal => {
                write!(f, "degenerate polygon: every edge is horizontal")
            }
            RasterError::CollinearVertices => {
                write!(f, "degenerate polygon: all vertices are collinear")
            }
            RasterError::OddActiveEdgeCount { y, count } => write!(
                f,
                "fill consistency error: {count} active edges at scan-line {y}"
            ),
            RasterError::ResourceExhausted { what, requested } => {
                write!(f, "could not allocate {what} for {requested} edges")
            }
        }
    }
}

impl std::error::Error for RasterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_classification() {
        assert!(RasterError::TooFewVertices { count: 2 }.is_degenerate());
        assert!(RasterError::AllEdgesHorizontal.is_degenerate());
        assert!(!RasterError::OddActiveEdgeCount { y: 3, count: 1 }.is_degenerate());
    }

    #[test]
    fn test_display_names_scanline() {
        let err = RasterError::OddActiveEdgeCount { y: 7, count: 3 };
        assert_eq!(
            err.to_string(),
            "fill consistency error: 3 active edges at scan-line 7"
        );
    }
}
