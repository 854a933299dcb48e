use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scanfill::bench::EdgeTable;
use scanfill::polygon::{vertices, Vertex};
use scanfill::render::{Canvas, ScanlineRasterizer};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn small_polygon() -> Vec<Vertex> {
    vertices(&[(100, 100), (120, 100), (125, 112), (110, 120), (96, 110)])
}

fn medium_polygon() -> Vec<Vertex> {
    vertices(&[(100, 100), (300, 100), (250, 200), (300, 300), (100, 300), (150, 200)])
}

fn large_polygon() -> Vec<Vertex> {
    vertices(&[(50, 50), (750, 100), (600, 300), (700, 550), (400, 420), (60, 560)])
}

/// Regular star with `points` spikes, filled with even-odd crossings.
fn star(points: usize, radius: f64) -> Vec<Vertex> {
    let n = points * 2;
    (0..n)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { radius * 0.4 };
            let a = i as f64 * std::f64::consts::TAU / n as f64;
            Vertex::new(
                (400.0 + r * a.cos()).round() as i32,
                (300.0 + r * a.sin()).round() as i32,
            )
        })
        .collect()
}

fn benchmark_single_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_polygon");
    let rasterizer = ScanlineRasterizer::new();

    for (name, ring) in [
        ("small", small_polygon()),
        ("medium", medium_polygon()),
        ("large", large_polygon()),
        ("star_64", star(64, 280.0)),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &ring, |b, ring| {
            let mut canvas = Canvas::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                let mut fb = canvas.as_framebuffer();
                let mut painter = fb.painter(0xFFFF0000);
                rasterizer.fill_polygon(black_box(ring), &mut painter).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("edge_table", name), &ring, |b, ring| {
            b.iter(|| EdgeTable::build(black_box(ring)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_many_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_polygons");
    let rasterizer = ScanlineRasterizer::new();

    // Generate a grid of small arrow shapes
    let polygons: Vec<Vec<Vertex>> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let origin = Vertex::new(col * 40, row * 30);
                [(0, 10), (20, 10), (20, 0), (35, 12), (20, 25), (20, 15), (0, 15)]
                    .iter()
                    .map(|&(x, y)| origin.offset(x, y))
                    .collect()
            })
        })
        .collect();

    group.bench_function("scanline_400_polygons", |b| {
        let mut canvas = Canvas::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            let mut fb = canvas.as_framebuffer();
            let mut painter = fb.painter(0xFFFF0000);
            for ring in &polygons {
                rasterizer.fill_polygon(black_box(ring), &mut painter).unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_polygon, benchmark_many_polygons);
criterion_main!(benches);
