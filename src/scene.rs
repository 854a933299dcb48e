//! Demo polygons and scene drawing.
//!
//! The scene lays a fixed set of test polygons out on a 3x2 grid of cells
//! sized to the canvas, and fills them all through the scan-line rasterizer.

use crate::colors;
use crate::polygon::{self, Vertex};
use crate::render::{Canvas, FillStats, RasterError, ScanlineRasterizer};

/// Template coordinates span `0..=TEMPLATE_SIZE` on both axes.
const TEMPLATE_SIZE: i32 = 100;
const COLUMNS: u32 = 3;
const ROWS: u32 = 2;

const TRIANGLE: &[(i32, i32)] = &[(10, 90), (90, 90), (50, 10)];
const SQUARE: &[(i32, i32)] = &[(15, 15), (85, 15), (85, 85), (15, 85)];
const ARROW: &[(i32, i32)] = &[
    (5, 40),
    (55, 40),
    (55, 15),
    (95, 50),
    (55, 85),
    (55, 60),
    (5, 60),
];
const STAR: &[(i32, i32)] = &[(50, 0), (79, 90), (2, 35), (98, 35), (21, 90)];
const BOW_TIE: &[(i32, i32)] = &[(10, 10), (90, 90), (90, 10), (10, 90)];
const COMB: &[(i32, i32)] = &[
    (5, 95),
    (5, 5),
    (25, 5),
    (25, 60),
    (40, 60),
    (40, 5),
    (60, 5),
    (60, 60),
    (75, 60),
    (75, 5),
    (95, 5),
    (95, 95),
];

/// A named, colored polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub color: u32,
}

impl Shape {
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>, color: u32) -> Self {
        Self {
            name: name.into(),
            vertices,
            color,
        }
    }
}

/// Outcome of drawing a scene.
#[derive(Debug, Default)]
pub struct SceneReport {
    /// Totals over the shapes that filled successfully.
    pub stats: FillStats,
    pub filled: usize,
    pub failed: Vec<(String, RasterError)>,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in test polygons, fitted to a `width` x `height` canvas.
    pub fn demo(width: u32, height: u32) -> Self {
        let cell_w = (width / COLUMNS) as i32;
        let cell_h = (height / ROWS) as i32;
        let margin = (cell_w.min(cell_h) / 10).max(1);

        let templates: [(&str, &[(i32, i32)]); 6] = [
            ("triangle", TRIANGLE),
            ("square", SQUARE),
            ("arrow", ARROW),
            ("star", STAR),
            ("bow-tie", BOW_TIE),
            ("comb", COMB),
        ];

        let shapes = templates
            .iter()
            .enumerate()
            .map(|(i, (name, points))| {
                let col = i as i32 % COLUMNS as i32;
                let row = i as i32 / COLUMNS as i32;
                let origin = Vertex::new(col * cell_w + margin, row * cell_h + margin);
                let vertices = points
                    .iter()
                    .map(|&(x, y)| {
                        origin.offset(
                            x * (cell_w - 2 * margin) / TEMPLATE_SIZE,
                            y * (cell_h - 2 * margin) / TEMPLATE_SIZE,
                        )
                    })
                    .collect();
                Shape::new(*name, vertices, colors::PALETTE[i % colors::PALETTE.len()])
            })
            .collect();

        Self { shapes }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Fills every shape into the canvas.
    ///
    /// A shape that fails is logged and skipped; the rest are still drawn.
    /// With `outline` set, edges and vertices are drawn over the fill.
    pub fn render(
        &self,
        rasterizer: &ScanlineRasterizer,
        canvas: &mut Canvas,
        outline: bool,
    ) -> SceneReport {
        let mut report = SceneReport::default();

        for shape in &self.shapes {
            let mut fb = canvas.as_framebuffer();
            let result = rasterizer.fill_polygon(&shape.vertices, &mut fb.painter(shape.color));

            match result {
                Ok(stats) => {
                    log::debug!(
                        "{}: {} pixels, signed area {}",
                        shape.name,
                        stats.pixels,
                        polygon::signed_area2(&shape.vertices) as f64 / 2.0
                    );
                    report.stats += stats;
                    report.filled += 1;
                }
                Err(err) => {
                    log::warn!("skipping {}: {err}", shape.name);
                    report.failed.push((shape.name.clone(), err));
                }
            }

            if outline {
                canvas.draw_outline(&shape.vertices, colors::OUTLINE);
                canvas.draw_vertices(&shape.vertices, 4, colors::VERTEX);
            }
        }

        report
    }
}
